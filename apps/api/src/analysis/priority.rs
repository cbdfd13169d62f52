use crate::analysis::models::TaskPriority;

/// Keyword tiers, checked in order. The first tier with any hit wins.
const PRIORITY_TIERS: &[(TaskPriority, &[&str])] = &[
    (TaskPriority::Critical, &["critical", "must", "essential"]),
    (TaskPriority::High, &["important", "urgent", "asap"]),
    (TaskPriority::Low, &["optional", "bonus", "if time"]),
];

/// Classifies a task title by case-insensitive keyword lookup.
pub fn classify_priority(title: &str) -> TaskPriority {
    let title_lower = title.to_lowercase();

    PRIORITY_TIERS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| title_lower.contains(k)))
        .map(|(priority, _)| *priority)
        .unwrap_or_default()
}
