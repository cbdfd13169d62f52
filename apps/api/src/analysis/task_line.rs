//! Task-line recognition: turns one bullet-like line (plus up to two indented
//! continuation lines) into a [`ParsedTask`].

use regex::Regex;
use std::sync::LazyLock;

use crate::analysis::hours::estimate_hours;
use crate::analysis::models::ParsedTask;
use crate::analysis::priority::classify_priority;
use crate::analysis::resources::extract_resources;

/// `-`, `*` or `•` followed by whitespace. Shared with the section extractor.
pub(crate) static BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•]\s+(.+)$").unwrap());

static NUMBERED_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+(.+)$").unwrap());

static CHECKBOX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[[ x]\]\s+(.+)$").unwrap());

static ARROW_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^→\s+(.+)$").unwrap());

/// How many lines after a task line may carry its description.
const MAX_CONTINUATION_LINES: usize = 2;

/// Returns the body of a list item, trying bullet, numbered, checkbox and arrow
/// markers in that order.
pub fn match_list_item(line: &str) -> Option<&str> {
    let line = line.trim();
    [&BULLET_REGEX, &NUMBERED_REGEX, &CHECKBOX_REGEX, &ARROW_REGEX]
        .into_iter()
        .find_map(|re| re.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Strips bold, italic and inline-code markers.
pub fn normalize_title(raw: &str) -> String {
    raw.replace("**", "")
        .replace('*', "")
        .replace('`', "")
        .trim()
        .to_string()
}

/// Recognizes the task on `lines[index]`, if any.
///
/// `sort_order` is supplied by the caller's per-phase counter; the caller
/// advances it only when this returns `Some`.
pub fn recognize_task(lines: &[&str], index: usize, sort_order: u32) -> Option<ParsedTask> {
    let body = match_list_item(lines.get(index)?)?;

    let title = normalize_title(body);
    if title.is_empty() {
        return None;
    }

    let description = collect_description(&lines[index + 1..]);
    let priority = classify_priority(&title);

    let combined = format!("{} {}", title, description.as_deref().unwrap_or(""));
    let resources = extract_resources(&combined);
    let estimated_hours = estimate_hours(&combined);

    Some(ParsedTask {
        title,
        description,
        priority,
        estimated_hours,
        resources,
        sort_order,
    })
}

/// Joins the indented lines directly following a task line. Stops at the
/// first line that does not start with a space or tab.
fn collect_description(following: &[&str]) -> Option<String> {
    let parts: Vec<&str> = following
        .iter()
        .take(MAX_CONTINUATION_LINES)
        .take_while(|line| line.starts_with([' ', '\t']))
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
