//! Strengths / gaps extraction.
//!
//! The narrative usually has a "Strengths" block and a "Gaps" block, each a
//! bullet list under some header. We look for a start trigger, collect bullets
//! until a stop trigger shows up, then stop for good.

use crate::analysis::task_line::BULLET_REGEX;

/// Entries at or below this many characters are treated as noise.
const MIN_ENTRY_CHARS: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct SectionTriggers {
    pub start: &'static [&'static str],
    pub stop: &'static [&'static str],
}

pub const STRENGTH_TRIGGERS: SectionTriggers = SectionTriggers {
    start: &["strength", "you have", "✅"],
    stop: &["gap", "area", "need"],
};

pub const GAP_TRIGGERS: SectionTriggers = SectionTriggers {
    start: &["gap", "area", "need", "⚠️"],
    stop: &["roadmap", "action", "next steps"],
};

/// Returns the bullet bodies of the first section opened by `triggers.start`.
pub fn extract_section_list(text: &str, triggers: &SectionTriggers) -> Vec<String> {
    let mut items = Vec::new();
    let mut in_section = false;

    for line in text.lines() {
        let line_lower = line.to_lowercase();

        if !in_section {
            in_section = contains_any(&line_lower, triggers.start);
            continue;
        }

        if contains_any(&line_lower, triggers.stop) {
            break;
        }

        if let Some(caps) = BULLET_REGEX.captures(line.trim()) {
            let body = caps[1].trim();
            if body.chars().count() > MIN_ENTRY_CHARS {
                items.push(body.to_string());
            }
        }
    }

    items
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strengths_stop_at_stop_trigger() {
        let text = "\
## Your Strengths
- Strong Python background
- Led a team of five engineers
- Shipped two ML products
## Gaps to close
- Kubernetes experience
- System design depth";
        let items = extract_section_list(text, &STRENGTH_TRIGGERS);
        assert_eq!(
            items,
            vec![
                "Strong Python background",
                "Led a team of five engineers",
                "Shipped two ML products",
            ]
        );
    }

    #[test]
    fn test_gaps_section() {
        let text = "\
Overall you are in good shape.
⚠️ Areas to develop:
* Public speaking practice
• Cloud certifications
- SQL
Next steps: see the roadmap below.
- Not a gap";
        let items = extract_section_list(text, &GAP_TRIGGERS);
        assert_eq!(items, vec!["Public speaking practice", "Cloud certifications"]);
    }

    #[test]
    fn test_short_entries_are_skipped() {
        let text = "Strengths:\n- Rust!\n- Go dev\n- 12345\n- Leadership";
        let items = extract_section_list(text, &STRENGTH_TRIGGERS);
        assert_eq!(items, vec!["Go dev", "Leadership"]);
    }

    #[test]
    fn test_no_start_trigger_is_empty() {
        let text = "- Solid communicator\n- Good mentor";
        assert!(extract_section_list(text, &STRENGTH_TRIGGERS).is_empty());
        assert!(extract_section_list("", &GAP_TRIGGERS).is_empty());
    }

    #[test]
    fn test_scan_does_not_resume_after_stop() {
        let text = "Strengths:\n- Great mentor\nGaps:\n- none\nMore strengths:\n- Excellent writer";
        let items = extract_section_list(text, &STRENGTH_TRIGGERS);
        assert_eq!(items, vec!["Great mentor"]);
    }

    #[test]
    fn test_non_bullet_lines_inside_section_are_ignored() {
        let text = "You have a lot going for you.\nSome prose here.\n1. Numbered is not a bullet\n- Deep domain knowledge";
        let items = extract_section_list(text, &STRENGTH_TRIGGERS);
        assert_eq!(items, vec!["Deep domain knowledge"]);
    }

    #[test]
    fn test_trigger_matching_is_case_insensitive() {
        let text = "KEY STRENGTHS\n- Stakeholder management";
        let items = extract_section_list(text, &STRENGTH_TRIGGERS);
        assert_eq!(items, vec!["Stakeholder management"]);
    }

    #[test]
    fn test_stop_trigger_inside_bullet_ends_section() {
        // "areas" contains the "area" stop word, so the bullet itself ends the scan.
        let text = "Strengths:\n- Strong communicator\n- Deep expertise in areas like ML\n- Great mentor";
        let items = extract_section_list(text, &STRENGTH_TRIGGERS);
        assert_eq!(items, vec!["Strong communicator"]);

        let text = "Strengths:\n- Deep expertise in areas like ML\n- Strong communicator";
        assert!(extract_section_list(text, &STRENGTH_TRIGGERS).is_empty());
    }
}
