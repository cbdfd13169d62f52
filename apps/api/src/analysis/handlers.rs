//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::analysis::models::{AnalysisSummary, ParsedRoadmap};
use crate::analysis::roadmap::{parse_roadmap_from_analysis, summarize_analysis};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseAnalysisRequest {
    pub analysis_text: String,
}

/// POST /api/v1/analysis/parse
///
/// Parses an assessment narrative into a roadmap plus strengths and gaps.
pub async fn handle_parse_analysis(
    State(state): State<AppState>,
    Json(request): Json<ParseAnalysisRequest>,
) -> Result<Json<AnalysisSummary>, AppError> {
    let text = prepare_text(&request.analysis_text, state.config.max_analysis_bytes)?;

    let summary = summarize_analysis(&text);
    info!(
        "Parsed analysis: {} phases, {} tasks, {} strengths, {} gaps",
        summary.roadmap.phases.len(),
        summary.roadmap.total_tasks,
        summary.strengths.len(),
        summary.gaps.len()
    );

    Ok(Json(summary))
}

/// POST /api/v1/analysis/roadmap
///
/// Roadmap only, for callers that regenerate the plan without touching strengths/gaps.
pub async fn handle_parse_roadmap(
    State(state): State<AppState>,
    Json(request): Json<ParseAnalysisRequest>,
) -> Result<Json<ParsedRoadmap>, AppError> {
    let text = prepare_text(&request.analysis_text, state.config.max_analysis_bytes)?;

    let roadmap = parse_roadmap_from_analysis(&text);
    info!(
        "Parsed roadmap: {} phases, {} tasks",
        roadmap.phases.len(),
        roadmap.total_tasks
    );

    Ok(Json(roadmap))
}

/// Validates the raw text and normalizes CRLF line endings, which the parser
/// does not handle on its own.
fn prepare_text(raw: &str, limit: usize) -> Result<String, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::Validation(
            "analysis_text cannot be empty".to_string(),
        ));
    }
    if raw.len() > limit {
        return Err(AppError::PayloadTooLarge {
            size: raw.len(),
            limit,
        });
    }
    Ok(raw.replace("\r\n", "\n"))
}
