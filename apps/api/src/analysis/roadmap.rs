//! Entry points for turning an AI career assessment into structured data.
//!
//! All three functions are pure: no I/O, no shared state, and they never fail.
//! Input must already use `\n` line endings.

use tracing::debug;

use crate::analysis::fallback::extract_fallback_phase;
use crate::analysis::models::{AnalysisSummary, ParsedRoadmap};
use crate::analysis::phases::segment_phases;
use crate::analysis::sections::{extract_section_list, GAP_TRIGGERS, STRENGTH_TRIGGERS};

/// Builds a phase-organized roadmap from the assessment text.
///
/// When no phase header is found, every task line in the text is gathered
/// into a single "Recommended Actions" phase instead.
pub fn parse_roadmap_from_analysis(text: &str) -> ParsedRoadmap {
    let lines: Vec<&str> = text.lines().collect();

    let mut phases = segment_phases(&lines);
    if phases.is_empty() {
        debug!("No phase headers found, falling back to flat task extraction");
        phases.extend(extract_fallback_phase(&lines));
    }

    let roadmap = ParsedRoadmap::from_phases(phases);
    if roadmap.is_empty() {
        debug!("No task lines recognized in {} lines of analysis", lines.len());
    }
    roadmap
}

pub fn extract_strengths_from_analysis(text: &str) -> Vec<String> {
    extract_section_list(text, &STRENGTH_TRIGGERS)
}

pub fn extract_gaps_from_analysis(text: &str) -> Vec<String> {
    extract_section_list(text, &GAP_TRIGGERS)
}

/// Runs all three extractors over the same text.
pub fn summarize_analysis(text: &str) -> AnalysisSummary {
    AnalysisSummary {
        roadmap: parse_roadmap_from_analysis(text),
        strengths: extract_strengths_from_analysis(text),
        gaps: extract_gaps_from_analysis(text),
    }
}
