//! Axum route handlers for RFP upload and browsing.

use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::ingest::{extract_pdf_text, is_pdf_filename, store_rfp, StoreRfpParams};
use crate::models::rfp::{RfpRow, RfpSummaryRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct UploadRfpResponse {
    pub rfp_id: Uuid,
    pub file_name: String,
    pub content_chars: usize,
    pub s3_pdf_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RfpListResponse {
    pub rfps: Vec<RfpSummaryRow>,
}

/// POST /api/v1/rfps (multipart: user_id, client_name, file)
///
/// Validates the upload, extracts the PDF text, archives the original file
/// to S3, and stores the RFP row.
pub async fn handle_upload_rfp(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadRfpResponse>, AppError> {
    let mut user_id: Option<Uuid> = None;
    let mut client_name: Option<String> = None;
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "user_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid user_id field: {e}")))?;
                let parsed = text
                    .parse::<Uuid>()
                    .map_err(|_| AppError::Validation("user_id must be a UUID".to_string()))?;
                user_id = Some(parsed);
            }
            "client_name" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid client_name field: {e}")))?;
                client_name = Some(text);
            }
            "file" => {
                let file_name = field.file_name().unwrap_or("rfp.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
                file = Some((file_name, data));
            }
            _ => {}
        }
    }

    let user_id =
        user_id.ok_or_else(|| AppError::Validation("user_id field is required".to_string()))?;
    let client_name = client_name
        .ok_or_else(|| AppError::Validation("client_name field is required".to_string()))?;
    let (file_name, data) =
        file.ok_or_else(|| AppError::Validation("file field is required".to_string()))?;

    if !is_pdf_filename(&file_name) {
        return Err(AppError::Validation(
            "Only .pdf files are accepted".to_string(),
        ));
    }

    let content = extract_pdf_text(&data).map_err(|e| AppError::Extraction(e.to_string()))?;

    let rfp = store_rfp(
        &state.db,
        &state.s3,
        &state.config.s3_bucket,
        StoreRfpParams {
            user_id,
            client_name: &client_name,
            file_name: &file_name,
            content: &content,
            pdf_bytes: &data,
        },
    )
    .await?;

    Ok(Json(UploadRfpResponse {
        rfp_id: rfp.id,
        file_name: rfp.file_name,
        content_chars: rfp.content.chars().count(),
        s3_pdf_key: rfp.s3_pdf_key,
    }))
}

/// GET /api/v1/rfps?user_id=
///
/// Lists the user's RFPs without shipping the full extracted text.
pub async fn handle_list_rfps(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<RfpListResponse>, AppError> {
    let rfps = sqlx::query_as::<_, RfpSummaryRow>(
        r#"
        SELECT id, user_id, client_name, file_name,
               length(content)::BIGINT AS content_chars, uploaded_at
        FROM rfps
        WHERE user_id = $1
        ORDER BY uploaded_at DESC
        "#,
    )
    .bind(query.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(RfpListResponse { rfps }))
}

/// GET /api/v1/rfps/:id?user_id=
///
/// Returns the full RFP row, extracted text included.
pub async fn handle_get_rfp(
    State(state): State<AppState>,
    Path(rfp_id): Path<Uuid>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<RfpRow>, AppError> {
    let rfp = sqlx::query_as::<_, RfpRow>("SELECT * FROM rfps WHERE id = $1 AND user_id = $2")
        .bind(rfp_id)
        .bind(query.user_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("RFP {rfp_id} not found")))?;

    Ok(Json(rfp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_query_deserializes_from_query_string() {
        let id = Uuid::new_v4();
        let query: OwnerQuery =
            serde_json::from_value(serde_json::json!({ "user_id": id })).unwrap();
        assert_eq!(query.user_id, id);
    }

    #[test]
    fn test_upload_response_serializes_expected_fields() {
        let response = UploadRfpResponse {
            rfp_id: Uuid::new_v4(),
            file_name: "licitacion.pdf".to_string(),
            content_chars: 4096,
            s3_pdf_key: Some("rfps/u/r.pdf".to_string()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["file_name"], "licitacion.pdf");
        assert_eq!(json["content_chars"], 4096);
    }
}
