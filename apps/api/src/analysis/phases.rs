//! Phase segmentation: a single forward pass that splits the narrative at
//! phase-boundary lines and collects the tasks under each boundary.

use tracing::debug;

use crate::analysis::models::{ParsedPhase, ParsedTask, PhaseId};
use crate::analysis::task_line::recognize_task;

/// Keywords that identify a phase header.
#[derive(Debug)]
pub struct PhaseDefinition {
    pub id: PhaseId,
    pub keywords: &'static [&'static str],
}

impl PhaseDefinition {
    fn name(&self) -> &'static str {
        self.id.display_name()
    }
}

/// Checked in order; the first definition whose keyword appears wins.
pub static PHASE_DEFINITIONS: &[PhaseDefinition] = &[
    PhaseDefinition {
        id: PhaseId::Immediate,
        keywords: &["immediate", "next 30 days", "right now", "start immediately"],
    },
    PhaseDefinition {
        id: PhaseId::ShortTerm,
        keywords: &["3-6 month", "short term", "next few months"],
    },
    PhaseDefinition {
        id: PhaseId::MidTerm,
        keywords: &["6-12 month", "long term", "next year"],
    },
];

/// A header must also carry one of these, so prose that merely mentions
/// "next year" does not open a phase.
const BOUNDARY_MARKERS: &[&str] = &[":", "##", "**"];

/// Returns the phase that `line` opens, if it is a boundary line.
pub fn match_phase_boundary(line: &str) -> Option<&'static PhaseDefinition> {
    if !BOUNDARY_MARKERS.iter().any(|m| line.contains(m)) {
        return None;
    }
    let line_lower = line.to_lowercase();
    PHASE_DEFINITIONS
        .iter()
        .find(|def| def.keywords.iter().any(|k| line_lower.contains(k)))
}

/// Segmenter state carried between lines.
///
/// The per-phase task counter is the accumulator length: it grows by one per
/// recognized task and starts at zero with every new phase.
#[derive(Debug)]
pub enum SegmentState {
    NoActivePhase,
    InPhase {
        definition: &'static PhaseDefinition,
        tasks: Vec<ParsedTask>,
    },
}

impl SegmentState {
    /// Consumes `lines[index]` and returns the next state, pushing any phase
    /// closed by a boundary line onto `emitted`.
    pub fn advance(self, lines: &[&str], index: usize, emitted: &mut Vec<ParsedPhase>) -> Self {
        if let Some(definition) = match_phase_boundary(lines[index]) {
            self.finish(emitted);
            return SegmentState::InPhase {
                definition,
                tasks: Vec::new(),
            };
        }

        match self {
            SegmentState::NoActivePhase => SegmentState::NoActivePhase,
            SegmentState::InPhase {
                definition,
                mut tasks,
            } => {
                if let Some(task) = recognize_task(lines, index, tasks.len() as u32) {
                    tasks.push(task);
                }
                SegmentState::InPhase { definition, tasks }
            }
        }
    }

    /// Closes the open phase, if any.
    pub fn finish(self, emitted: &mut Vec<ParsedPhase>) {
        if let SegmentState::InPhase { definition, tasks } = self {
            debug!(
                "Closing phase {} with {} tasks",
                definition.id,
                tasks.len()
            );
            emitted.push(ParsedPhase {
                phase_id: definition.id,
                phase_name: definition.name().to_string(),
                tasks,
            });
        }
    }
}

/// Splits `lines` into phases. Lines before the first boundary are dropped.
pub fn segment_phases(lines: &[&str]) -> Vec<ParsedPhase> {
    let (state, mut phases) = (0..lines.len()).fold(
        (SegmentState::NoActivePhase, Vec::new()),
        |(state, mut emitted), index| {
            let state = state.advance(lines, index, &mut emitted);
            (state, emitted)
        },
    );
    state.finish(&mut phases);
    phases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        text.lines().collect()
    }

    #[test]
    fn test_boundary_requires_keyword_and_marker() {
        assert_eq!(
            match_phase_boundary("## Immediate Actions").map(|d| d.id),
            Some(PhaseId::Immediate)
        );
        assert_eq!(
            match_phase_boundary("Short term goals:").map(|d| d.id),
            Some(PhaseId::ShortTerm)
        );
        assert_eq!(
            match_phase_boundary("**6-12 Month Vision**").map(|d| d.id),
            Some(PhaseId::MidTerm)
        );
        assert!(match_phase_boundary("I expect a promotion next year").is_none());
        assert!(match_phase_boundary("## Your Strengths").is_none());
    }

    #[test]
    fn test_first_definition_wins() {
        // Mentions both "immediate" and "next year".
        assert_eq!(
            match_phase_boundary("## Immediate steps toward next year:").map(|d| d.id),
            Some(PhaseId::Immediate)
        );
    }

    #[test]
    fn test_no_boundary_yields_no_phases() {
        let text = "- Update resume\n- Apply to jobs";
        assert!(segment_phases(&lines(text)).is_empty());
    }

    #[test]
    fn test_lines_before_first_boundary_are_dropped() {
        let text = "- Lost task\n## Immediate:\n- Kept task";
        let phases = segment_phases(&lines(text));
        assert_eq!(phases.len(), 1);
        assert_eq!(phases[0].tasks.len(), 1);
        assert_eq!(phases[0].tasks[0].title, "Kept task");
    }

    #[test]
    fn test_sort_order_resets_per_phase() {
        let text = "## Immediate:\n- a1\n- a2\n- a3\n## 3-6 Months:\n- b1\n- b2";
        let phases = segment_phases(&lines(text));
        assert_eq!(phases.len(), 2);
        let orders: Vec<Vec<u32>> = phases
            .iter()
            .map(|p| p.tasks.iter().map(|t| t.sort_order).collect())
            .collect();
        assert_eq!(orders, vec![vec![0, 1, 2], vec![0, 1]]);
    }

    #[test]
    fn test_boundary_line_is_not_a_task() {
        // A bullet that also qualifies as a boundary opens a phase instead.
        let text = "- **Immediate**: things to do\n- Update resume";
        let phases = segment_phases(&lines(text));
        assert_eq!(phases.len(), 1);
        assert_eq!(phases[0].tasks.len(), 1);
        assert_eq!(phases[0].tasks[0].title, "Update resume");
    }

    #[test]
    fn test_empty_phase_is_still_emitted() {
        let text = "## Immediate:\n## Long term:\n- Learn Rust";
        let phases = segment_phases(&lines(text));
        assert_eq!(phases.len(), 2);
        assert!(phases[0].tasks.is_empty());
        assert_eq!(phases[1].phase_id, PhaseId::MidTerm);
        assert_eq!(phases[1].phase_name, "Mid-Term Goals (6-12 Months)");
    }

    #[test]
    fn test_repeated_phase_id_produces_separate_phases() {
        let text = "## Immediate:\n- a\n## Right now:\n- b";
        let phases = segment_phases(&lines(text));
        assert_eq!(phases.len(), 2);
        assert!(phases.iter().all(|p| p.phase_id == PhaseId::Immediate));
    }

    #[test]
    fn test_advance_from_no_active_phase_ignores_tasks() {
        let lines = ["- orphan"];
        let mut emitted = Vec::new();
        let state = SegmentState::NoActivePhase.advance(&lines, 0, &mut emitted);
        assert!(matches!(state, SegmentState::NoActivePhase));
        assert!(emitted.is_empty());
    }

    #[test]
    fn test_advance_on_boundary_closes_open_phase() {
        let lines = ["## Immediate:", "- one", "## Next year:"];
        let mut emitted = Vec::new();
        let state = SegmentState::NoActivePhase.advance(&lines, 0, &mut emitted);
        let state = state.advance(&lines, 1, &mut emitted);
        assert!(emitted.is_empty());
        let state = state.advance(&lines, 2, &mut emitted);
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].tasks.len(), 1);
        match state {
            SegmentState::InPhase { definition, tasks } => {
                assert_eq!(definition.id, PhaseId::MidTerm);
                assert!(tasks.is_empty());
            }
            SegmentState::NoActivePhase => panic!("expected an open phase"),
        }
    }
}
