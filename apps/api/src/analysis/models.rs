use std::fmt;

use serde::{Deserialize, Serialize};

/// Timeframe bucket a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseId {
    Immediate,
    ShortTerm,
    MidTerm,
}

impl PhaseId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseId::Immediate => "immediate",
            PhaseId::ShortTerm => "short_term",
            PhaseId::MidTerm => "mid_term",
        }
    }

    /// Human-readable phase name stored alongside the roadmap.
    pub fn display_name(&self) -> &'static str {
        match self {
            PhaseId::Immediate => "Immediate Actions (Next 30 Days)",
            PhaseId::ShortTerm => "Short-Term Goals (3-6 Months)",
            PhaseId::MidTerm => "Mid-Term Goals (6-12 Months)",
        }
    }
}

impl fmt::Display for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Critical,
    High,
    #[default]
    Normal,
    Low,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Critical => "CRITICAL",
            TaskPriority::High => "HIGH",
            TaskPriority::Normal => "NORMAL",
            TaskPriority::Low => "LOW",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single actionable recommendation pulled out of the narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTask {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
    /// Position within the owning phase, contiguous from 0.
    pub sort_order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPhase {
    pub phase_id: PhaseId,
    pub phase_name: String,
    pub tasks: Vec<ParsedTask>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRoadmap {
    pub phases: Vec<ParsedPhase>,
    pub total_tasks: usize,
}

impl ParsedRoadmap {
    /// Builds a roadmap whose `total_tasks` always agrees with its phases.
    pub fn from_phases(phases: Vec<ParsedPhase>) -> Self {
        let total_tasks = phases.iter().map(|p| p.tasks.len()).sum();
        Self {
            phases,
            total_tasks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_tasks == 0
    }
}

/// Everything extracted from one assessment narrative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub roadmap: ParsedRoadmap,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
}
