//! RFP ingestion: PDF text extraction, S3 archival of the original file,
//! and insertion of the `rfps` row.
//!
//! The extractor produces one flat string for the whole document; page
//! boundaries are not preserved. Downstream analysis makes no assumption
//! about them.

pub mod handlers;

use aws_sdk_s3::primitives::ByteStream;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::rfp::RfpRow;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF parse failed: {0}")]
    Parse(String),

    #[error("document contains no extractable text")]
    Empty,
}

/// Accepts only `.pdf` uploads (case-insensitive extension check).
pub fn is_pdf_filename(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Extracts the concatenated text of all pages from in-memory PDF bytes.
pub fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractionError> {
    let text =
        pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractionError::Parse(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }

    Ok(text)
}

pub struct StoreRfpParams<'a> {
    pub user_id: Uuid,
    pub client_name: &'a str,
    pub file_name: &'a str,
    pub content: &'a str,
    pub pdf_bytes: &'a [u8],
}

/// Archives the original PDF to S3 and inserts the RFP row.
pub async fn store_rfp(
    pool: &PgPool,
    s3: &aws_sdk_s3::Client,
    s3_bucket: &str,
    params: StoreRfpParams<'_>,
) -> Result<RfpRow, AppError> {
    let rfp_id = Uuid::new_v4();

    let s3_key = format!("rfps/{}/{}.pdf", params.user_id, rfp_id);
    s3.put_object()
        .bucket(s3_bucket)
        .key(&s3_key)
        .body(ByteStream::from(params.pdf_bytes.to_vec()))
        .content_type("application/pdf")
        .send()
        .await
        .map_err(|e| AppError::S3(format!("PDF archive upload failed: {e}")))?;

    info!("Archived RFP PDF to s3://{}/{}", s3_bucket, s3_key);

    let rfp = sqlx::query_as::<_, RfpRow>(
        r#"
        INSERT INTO rfps (id, user_id, client_name, file_name, content, s3_pdf_key)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(rfp_id)
    .bind(params.user_id)
    .bind(params.client_name)
    .bind(params.file_name)
    .bind(params.content)
    .bind(&s3_key)
    .fetch_one(pool)
    .await?;

    info!(
        "Stored RFP {} ({} chars) for user {}",
        rfp.id,
        rfp.content.chars().count(),
        rfp.user_id
    );

    Ok(rfp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extension_check_is_case_insensitive() {
        assert!(is_pdf_filename("propuesta.pdf"));
        assert!(is_pdf_filename("PROPUESTA.PDF"));
        assert!(!is_pdf_filename("propuesta.docx"));
        assert!(!is_pdf_filename("propuesta"));
        assert!(!is_pdf_filename("pdf"));
    }

    #[test]
    fn test_invalid_pdf_bytes_yield_parse_error() {
        let result = extract_pdf_text(b"this is not a pdf document");
        assert!(matches!(result, Err(ExtractionError::Parse(_))));
    }
}
