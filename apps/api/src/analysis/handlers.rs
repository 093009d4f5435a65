//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::analyzer::{analyze_rfp, AnalyzeError};
use crate::errors::AppError;
use crate::llm_client::prompts::DEFAULT_LANGUAGE;
use crate::models::rfp::RfpRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub user_id: Uuid,
    pub rfp_id: Uuid,
    pub category: String,
    /// Target answer language; defaults to español.
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub rfp_id: Uuid,
    pub category: String,
    pub analysis: String,
    pub suggested_steps: String,
    pub chunks_total: usize,
    pub chunks_failed: usize,
}

/// POST /api/v1/analyses
///
/// Runs the chunked analysis pipeline for one stored RFP and category.
/// Does not persist anything: the caller reviews/edits the result and saves
/// it through the documents API.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.category.trim().is_empty() {
        return Err(AppError::Validation("category cannot be empty".to_string()));
    }

    let rfp = sqlx::query_as::<_, RfpRow>("SELECT * FROM rfps WHERE id = $1 AND user_id = $2")
        .bind(request.rfp_id)
        .bind(request.user_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("RFP {} not found", request.rfp_id)))?;

    let language = request.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);

    let result = analyze_rfp(
        state.llm.as_ref(),
        &rfp.content,
        &request.category,
        language,
    )
    .await
    .map_err(|e| match e {
        AnalyzeError::Config(msg) => AppError::Llm(format!("Analysis aborted: {msg}")),
    })?;

    Ok(Json(AnalyzeResponse {
        rfp_id: rfp.id,
        category: request.category,
        analysis: result.analysis,
        suggested_steps: result.suggested_steps,
        chunks_total: result.chunks_total,
        chunks_failed: result.chunks_failed,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_request_deserialization() {
        let json = serde_json::json!({
            "user_id": Uuid::new_v4(),
            "rfp_id": Uuid::new_v4(),
            "category": "Resumen Ejecutivo"
        });
        let request: AnalyzeRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.category, "Resumen Ejecutivo");
        assert!(request.language.is_none());
    }

    #[test]
    fn test_analyze_request_accepts_language_override() {
        let json = serde_json::json!({
            "user_id": Uuid::new_v4(),
            "rfp_id": Uuid::new_v4(),
            "category": "Casos de Uso",
            "language": "inglés"
        });
        let request: AnalyzeRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.language.as_deref(), Some("inglés"));
    }
}
