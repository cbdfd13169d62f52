use tracing::debug;

use crate::analysis::models::{ParsedPhase, ParsedTask, PhaseId};
use crate::analysis::task_line::recognize_task;

pub const FALLBACK_PHASE_NAME: &str = "Recommended Actions";

/// Collects every task line in the text into one catch-all phase.
/// Used only when no phase header was found.
pub fn extract_fallback_phase(lines: &[&str]) -> Option<ParsedPhase> {
    let tasks = (0..lines.len()).fold(Vec::<ParsedTask>::new(), |mut tasks, index| {
        if let Some(task) = recognize_task(lines, index, tasks.len() as u32) {
            tasks.push(task);
        }
        tasks
    });

    if tasks.is_empty() {
        return None;
    }

    debug!("Fallback extraction recovered {} tasks", tasks.len());
    Some(ParsedPhase {
        phase_id: PhaseId::Immediate,
        phase_name: FALLBACK_PHASE_NAME.to_string(),
        tasks,
    })
}
