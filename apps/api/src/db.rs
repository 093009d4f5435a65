use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the service tables if they do not exist yet.
/// Statements are executed one by one; sqlx prepared queries do not batch.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    info!("Initializing database schema");

    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS rfps (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL,
            client_name TEXT NOT NULL,
            file_name TEXT NOT NULL,
            content TEXT NOT NULL,
            s3_pdf_key TEXT,
            uploaded_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id UUID PRIMARY KEY,
            rfp_id UUID NOT NULL REFERENCES rfps(id),
            name TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS subcategories (
            id UUID PRIMARY KEY,
            category_id UUID NOT NULL REFERENCES categories(id),
            name TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS rfp_documents (
            id UUID PRIMARY KEY,
            rfp_id UUID NOT NULL REFERENCES rfps(id),
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            category_id UUID REFERENCES categories(id),
            subcategory_id UUID REFERENCES subcategories(id),
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
        "CREATE INDEX IF NOT EXISTS idx_rfps_user ON rfps(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_rfp_documents_rfp ON rfp_documents(rfp_id)",
    ];

    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized");
    Ok(())
}
