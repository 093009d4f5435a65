//! Persisted analysis documents: CRUD across the rfp_documents, categories,
//! and subcategories tables.
//!
//! Ownership is enforced in every query by joining through the owning RFP's
//! user_id; a document belonging to another user behaves as nonexistent.

pub mod handlers;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::{DocumentRow, DocumentWithNames};

pub struct NewDocument<'a> {
    pub user_id: Uuid,
    pub rfp_id: Uuid,
    pub title: &'a str,
    pub content: &'a str,
    pub category_name: &'a str,
    pub subcategory_name: &'a str,
}

/// Saves an (edited) analysis result under its category and subcategory.
/// Category and subcategory rows are created alongside the document in one
/// transaction, mirroring how documents are later orphan-cleaned on delete.
pub async fn save_document(pool: &PgPool, doc: NewDocument<'_>) -> Result<DocumentRow, AppError> {
    let owns: Option<Uuid> =
        sqlx::query_scalar("SELECT id FROM rfps WHERE id = $1 AND user_id = $2")
            .bind(doc.rfp_id)
            .bind(doc.user_id)
            .fetch_optional(pool)
            .await?;
    if owns.is_none() {
        return Err(AppError::NotFound(format!("RFP {} not found", doc.rfp_id)));
    }

    let mut tx = pool.begin().await?;

    let category_id = Uuid::new_v4();
    sqlx::query("INSERT INTO categories (id, rfp_id, name) VALUES ($1, $2, $3)")
        .bind(category_id)
        .bind(doc.rfp_id)
        .bind(doc.category_name)
        .execute(&mut *tx)
        .await?;

    let subcategory_id = Uuid::new_v4();
    sqlx::query("INSERT INTO subcategories (id, category_id, name) VALUES ($1, $2, $3)")
        .bind(subcategory_id)
        .bind(category_id)
        .bind(doc.subcategory_name)
        .execute(&mut *tx)
        .await?;

    let document = sqlx::query_as::<_, DocumentRow>(
        r#"
        INSERT INTO rfp_documents (id, rfp_id, title, content, category_id, subcategory_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(doc.rfp_id)
    .bind(doc.title)
    .bind(doc.content)
    .bind(category_id)
    .bind(subcategory_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(
        "Saved document {} ({} / {}) for RFP {}",
        document.id, doc.category_name, doc.subcategory_name, doc.rfp_id
    );

    Ok(document)
}

/// All documents across the user's RFPs, newest first.
pub async fn list_documents_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<DocumentWithNames>, AppError> {
    let documents = sqlx::query_as::<_, DocumentWithNames>(
        r#"
        SELECT d.id, d.rfp_id, d.title, d.content, d.created_at,
               c.name AS category_name, s.name AS subcategory_name
        FROM rfp_documents d
        JOIN rfps r ON r.id = d.rfp_id
        LEFT JOIN categories c ON c.id = d.category_id
        LEFT JOIN subcategories s ON s.id = d.subcategory_id
        WHERE r.user_id = $1
        ORDER BY d.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(documents)
}

/// One document with its category names; None when it does not exist or
/// belongs to another user.
pub async fn get_document(
    pool: &PgPool,
    user_id: Uuid,
    document_id: Uuid,
) -> Result<Option<DocumentWithNames>, AppError> {
    let document = sqlx::query_as::<_, DocumentWithNames>(
        r#"
        SELECT d.id, d.rfp_id, d.title, d.content, d.created_at,
               c.name AS category_name, s.name AS subcategory_name
        FROM rfp_documents d
        JOIN rfps r ON r.id = d.rfp_id
        LEFT JOIN categories c ON c.id = d.category_id
        LEFT JOIN subcategories s ON s.id = d.subcategory_id
        WHERE d.id = $1 AND r.user_id = $2
        "#,
    )
    .bind(document_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(document)
}

/// Updates title and content, refreshing the document timestamp.
/// Returns false when the document does not exist for this user.
pub async fn update_document(
    pool: &PgPool,
    user_id: Uuid,
    document_id: Uuid,
    title: &str,
    content: &str,
) -> Result<bool, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE rfp_documents d
        SET title = $1, content = $2, created_at = now()
        FROM rfps r
        WHERE d.id = $3 AND r.id = d.rfp_id AND r.user_id = $4
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(document_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Deletes a document and removes its subcategory/category rows when no other
/// document references them. Returns false when the document does not exist
/// for this user.
pub async fn delete_document(
    pool: &PgPool,
    user_id: Uuid,
    document_id: Uuid,
) -> Result<bool, AppError> {
    let Some(document) = sqlx::query_as::<_, DocumentRow>(
        r#"
        SELECT d.*
        FROM rfp_documents d
        JOIN rfps r ON r.id = d.rfp_id
        WHERE d.id = $1 AND r.user_id = $2
        "#,
    )
    .bind(document_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    else {
        return Ok(false);
    };

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM rfp_documents WHERE id = $1")
        .bind(document.id)
        .execute(&mut *tx)
        .await?;

    if let Some(subcategory_id) = document.subcategory_id {
        let remaining: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM rfp_documents WHERE subcategory_id = $1",
        )
        .bind(subcategory_id)
        .fetch_one(&mut *tx)
        .await?;
        if remaining == 0 {
            sqlx::query("DELETE FROM subcategories WHERE id = $1")
                .bind(subcategory_id)
                .execute(&mut *tx)
                .await?;
        }
    }

    if let Some(category_id) = document.category_id {
        let remaining: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM rfp_documents WHERE category_id = $1")
                .bind(category_id)
                .fetch_one(&mut *tx)
                .await?;
        if remaining == 0 {
            sqlx::query("DELETE FROM categories WHERE id = $1")
                .bind(category_id)
                .execute(&mut *tx)
                .await?;
        }
    }

    tx.commit().await?;

    info!("Deleted document {} for user {}", document_id, user_id);
    Ok(true)
}
