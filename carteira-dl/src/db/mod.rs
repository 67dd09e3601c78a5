//! Database access for carteira-dl
//!
//! A single SQLite database holds the durable document cache. The pool is
//! shared across concurrent lookups; the schema is created on startup.

pub mod documents;

use anyhow::Result;
use sqlx::SqlitePool;
use std::path::Path;

/// Initialize database connection pool
pub async fn init_database_pool(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Use proper SQLite URI with mode=rwc (read, write, create)
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    tracing::debug!("Connecting to database: {}", db_url);

    let pool = SqlitePool::connect(&db_url).await?;

    init_schema(&pool).await?;

    Ok(pool)
}

/// Create carteira-dl tables if they don't exist.
///
/// Public so integration tests can initialize in-memory databases.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            id TEXT PRIMARY KEY,
            full_name TEXT NOT NULL DEFAULT '',
            parent1_name TEXT NOT NULL DEFAULT '',
            parent2_name TEXT NOT NULL DEFAULT '',
            influencer_id TEXT NOT NULL DEFAULT '',
            cpf TEXT NOT NULL DEFAULT '',
            issue_date TEXT NOT NULL DEFAULT '',
            rg_uf TEXT NOT NULL DEFAULT '',
            signature_image TEXT NOT NULL DEFAULT '',
            birth_date TEXT NOT NULL DEFAULT '',
            birthplace TEXT NOT NULL DEFAULT '',
            nationality TEXT NOT NULL DEFAULT '',
            issue_place_and_date TEXT NOT NULL DEFAULT '',
            face_image TEXT NOT NULL DEFAULT '',
            raw_source TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database tables initialized (documents)");

    Ok(())
}
