//! Axum route handlers for the saved-documents API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::documents::{
    delete_document, get_document, list_documents_for_user, save_document, update_document,
    NewDocument,
};
use crate::errors::AppError;
use crate::models::document::DocumentWithNames;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SaveDocumentRequest {
    pub user_id: Uuid,
    pub rfp_id: Uuid,
    pub title: String,
    pub content: String,
    pub category_name: String,
    pub subcategory_name: String,
}

#[derive(Debug, Serialize)]
pub struct SaveDocumentResponse {
    pub document_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDocumentRequest {
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentWithNames>,
}

#[derive(Debug, Serialize)]
pub struct DeleteDocumentResponse {
    pub deleted: bool,
}

/// POST /api/v1/documents
///
/// Persists an edited analysis result under its category/subcategory.
pub async fn handle_save_document(
    State(state): State<AppState>,
    Json(request): Json<SaveDocumentRequest>,
) -> Result<Json<SaveDocumentResponse>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if request.category_name.trim().is_empty() {
        return Err(AppError::Validation(
            "category_name cannot be empty".to_string(),
        ));
    }

    let document = save_document(
        &state.db,
        NewDocument {
            user_id: request.user_id,
            rfp_id: request.rfp_id,
            title: &request.title,
            content: &request.content,
            category_name: &request.category_name,
            subcategory_name: &request.subcategory_name,
        },
    )
    .await?;

    Ok(Json(SaveDocumentResponse {
        document_id: document.id,
    }))
}

/// GET /api/v1/documents?user_id=
pub async fn handle_list_documents(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<DocumentListResponse>, AppError> {
    let documents = list_documents_for_user(&state.db, query.user_id).await?;
    Ok(Json(DocumentListResponse { documents }))
}

/// GET /api/v1/documents/:id?user_id=
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(document_id): Path<Uuid>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<DocumentWithNames>, AppError> {
    let document = get_document(&state.db, query.user_id, document_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Document {document_id} not found")))?;

    Ok(Json(document))
}

/// PATCH /api/v1/documents/:id
pub async fn handle_update_document(
    State(state): State<AppState>,
    Path(document_id): Path<Uuid>,
    Json(request): Json<UpdateDocumentRequest>,
) -> Result<Json<DocumentWithNames>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let updated = update_document(
        &state.db,
        request.user_id,
        document_id,
        &request.title,
        &request.content,
    )
    .await?;

    if !updated {
        return Err(AppError::NotFound(format!(
            "Document {document_id} not found"
        )));
    }

    let document = get_document(&state.db, request.user_id, document_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Document {document_id} not found")))?;

    Ok(Json(document))
}

/// DELETE /api/v1/documents/:id?user_id=
pub async fn handle_delete_document(
    State(state): State<AppState>,
    Path(document_id): Path<Uuid>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<DeleteDocumentResponse>, AppError> {
    let deleted = delete_document(&state.db, query.user_id, document_id).await?;

    if !deleted {
        return Err(AppError::NotFound(format!(
            "Document {document_id} not found"
        )));
    }

    Ok(Json(DeleteDocumentResponse { deleted }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_request_deserialization() {
        let json = serde_json::json!({
            "user_id": Uuid::new_v4(),
            "rfp_id": Uuid::new_v4(),
            "title": "Resumen Ejecutivo - Puente",
            "content": "Resumen Ejecutivo: el proyecto es viable.",
            "category_name": "Propuesta",
            "subcategory_name": "Resumen Ejecutivo"
        });
        let request: SaveDocumentRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.subcategory_name, "Resumen Ejecutivo");
    }

    #[test]
    fn test_update_request_requires_all_fields() {
        let json = serde_json::json!({
            "user_id": Uuid::new_v4(),
            "title": "Nuevo título"
        });
        let result: Result<UpdateDocumentRequest, _> = serde_json::from_value(json);
        assert!(result.is_err(), "content is required");
    }
}
