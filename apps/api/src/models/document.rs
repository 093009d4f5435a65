use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted analysis document as stored in `rfp_documents`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub rfp_id: Uuid,
    pub title: String,
    pub content: String,
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Document joined with its category and subcategory names, the shape
/// returned by the read endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentWithNames {
    pub id: Uuid,
    pub rfp_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub category_name: Option<String>,
    pub subcategory_name: Option<String>,
}
