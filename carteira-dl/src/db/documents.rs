//! Document cache operations
//!
//! The `documents` table is the durable, cross-session cache of
//! display-ready card records, keyed by the upstream document id. Records
//! are written on first load and read thereafter; this service never
//! deletes them (expiry is an operational concern handled elsewhere).

use sqlx::{Row, SqlitePool};
use sqlx::sqlite::SqliteRow;

use carteira_common::{Error, Result};

use crate::models::{DocumentContent, DocumentRecord};

/// Check whether a record exists for the given document id.
///
/// Store errors propagate; absence is only ever reported on a successful
/// query, never as a fallback for a failed one.
pub async fn document_exists(pool: &SqlitePool, document_id: &str) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE id = ?")
        .bind(document_id)
        .fetch_one(pool)
        .await?;

    Ok(count > 0)
}

/// Load a cached record by document id.
pub async fn get_document(pool: &SqlitePool, document_id: &str) -> Result<Option<DocumentRecord>> {
    let row = sqlx::query(
        r#"
        SELECT id, full_name, parent1_name, parent2_name, influencer_id, cpf,
               issue_date, rg_uf, signature_image, birth_date, birthplace,
               nationality, issue_place_and_date, face_image, raw_source,
               created_at
        FROM documents
        WHERE id = ?
        "#,
    )
    .bind(document_id)
    .fetch_optional(pool)
    .await?;

    row.map(record_from_row).transpose()
}

/// Persist a transformed record.
///
/// `created_at` is assigned by the store at write time. The normal flow
/// writes each id exactly once (the loader guards that); if a duplicate
/// write does arrive, the display fields are replaced but the original
/// `created_at` is preserved.
pub async fn save_document(pool: &SqlitePool, content: &DocumentContent) -> Result<()> {
    let raw_source = serde_json::to_string(&content.raw_source)
        .map_err(|e| Error::Internal(format!("Failed to serialize raw_source: {}", e)))?;

    sqlx::query(
        r#"
        INSERT INTO documents (
            id, full_name, parent1_name, parent2_name, influencer_id, cpf,
            issue_date, rg_uf, signature_image, birth_date, birthplace,
            nationality, issue_place_and_date, face_image, raw_source,
            created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        ON CONFLICT(id) DO UPDATE SET
            full_name = excluded.full_name,
            parent1_name = excluded.parent1_name,
            parent2_name = excluded.parent2_name,
            influencer_id = excluded.influencer_id,
            cpf = excluded.cpf,
            issue_date = excluded.issue_date,
            rg_uf = excluded.rg_uf,
            signature_image = excluded.signature_image,
            birth_date = excluded.birth_date,
            birthplace = excluded.birthplace,
            nationality = excluded.nationality,
            issue_place_and_date = excluded.issue_place_and_date,
            face_image = excluded.face_image,
            raw_source = excluded.raw_source
        "#,
    )
    .bind(&content.id)
    .bind(&content.full_name)
    .bind(&content.parent1_name)
    .bind(&content.parent2_name)
    .bind(&content.influencer_id)
    .bind(&content.cpf)
    .bind(&content.issue_date)
    .bind(&content.rg_uf)
    .bind(&content.signature_image)
    .bind(&content.birth_date)
    .bind(&content.birthplace)
    .bind(&content.nationality)
    .bind(&content.issue_place_and_date)
    .bind(&content.face_image)
    .bind(&raw_source)
    .execute(pool)
    .await?;

    Ok(())
}

fn record_from_row(row: SqliteRow) -> Result<DocumentRecord> {
    let raw_source: String = row.get("raw_source");
    let raw_source = serde_json::from_str(&raw_source)
        .map_err(|e| Error::Internal(format!("Failed to deserialize raw_source: {}", e)))?;

    let created_at: String = row.get("created_at");
    let created_at = chrono::DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| Error::Internal(format!("Failed to parse created_at: {}", e)))?
        .with_timezone(&chrono::Utc);

    Ok(DocumentRecord {
        content: DocumentContent {
            id: row.get("id"),
            full_name: row.get("full_name"),
            parent1_name: row.get("parent1_name"),
            parent2_name: row.get("parent2_name"),
            influencer_id: row.get("influencer_id"),
            cpf: row.get("cpf"),
            issue_date: row.get("issue_date"),
            rg_uf: row.get("rg_uf"),
            signature_image: row.get("signature_image"),
            birth_date: row.get("birth_date"),
            birthplace: row.get("birthplace"),
            nationality: row.get("nationality"),
            issue_place_and_date: row.get("issue_place_and_date"),
            face_image: row.get("face_image"),
            raw_source,
        },
        created_at,
    })
}
