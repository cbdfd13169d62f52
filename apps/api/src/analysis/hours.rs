use regex::Regex;
use std::sync::LazyLock;

// Tried in order; only the first pattern that matches anywhere is used.
static HOUR_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)([0-9]+)\s*hours?").unwrap(),
        Regex::new(r"(?i)([0-9]+)\s*hrs?").unwrap(),
        Regex::new(r"(?i)([0-9]+)\s*h\b").unwrap(),
    ]
});

/// Pulls an hour estimate such as "3 hours", "10hrs" or "2h" out of task text.
///
/// Unit matching is case-insensitive ("3 Hours", "2H"); only ASCII digits count.
pub fn estimate_hours(text: &str) -> Option<u32> {
    let captures = HOUR_PATTERNS.iter().find_map(|re| re.captures(text))?;
    captures.get(1)?.as_str().parse::<u32>().ok()
}
