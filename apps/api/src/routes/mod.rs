pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::documents::handlers as document_handlers;
use crate::ingest::handlers as ingest_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // RFP API
        .route("/api/v1/rfps", post(ingest_handlers::handle_upload_rfp))
        .route("/api/v1/rfps", get(ingest_handlers::handle_list_rfps))
        .route("/api/v1/rfps/:id", get(ingest_handlers::handle_get_rfp))
        // Analysis API
        .route("/api/v1/analyses", post(analysis_handlers::handle_analyze))
        // Documents API
        .route(
            "/api/v1/documents",
            post(document_handlers::handle_save_document),
        )
        .route(
            "/api/v1/documents",
            get(document_handlers::handle_list_documents),
        )
        .route(
            "/api/v1/documents/:id",
            get(document_handlers::handle_get_document),
        )
        .route(
            "/api/v1/documents/:id",
            patch(document_handlers::handle_update_document),
        )
        .route(
            "/api/v1/documents/:id",
            delete(document_handlers::handle_delete_document),
        )
        .with_state(state)
}
