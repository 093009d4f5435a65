use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored RFP: extracted text plus the S3 key of the archived PDF.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RfpRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub client_name: String,
    pub file_name: String,
    pub content: String,
    pub s3_pdf_key: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// Listing view of an RFP without the (potentially large) extracted text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RfpSummaryRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub client_name: String,
    pub file_name: String,
    pub content_chars: i64,
    pub uploaded_at: DateTime<Utc>,
}
