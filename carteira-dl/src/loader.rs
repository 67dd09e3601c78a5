//! Document loading pipeline
//!
//! Cache-first load flow for one document id:
//!
//! ```text
//! CheckingCache -> {hit:  Reading}
//!               -> {miss: Authenticating -> FetchingRemote -> Transforming
//!                         -> Persisting -> ReReading}
//! ```
//!
//! Steps run strictly sequentially; each await is one of the pipeline's
//! I/O suspension points. A failed step fails the whole lookup with the
//! matching `LoadError` kind and nothing is retried internally; callers
//! re-invoke the pipeline, which re-runs the cache check first. The cache
//! is only written after a fully successful transform, so remote failures
//! never corrupt it.
//!
//! Concurrent lookups for different ids are independent. Two concurrent
//! cache-miss lookups for the same id may both fetch and write; the store
//! keeps the first `created_at` in that case. There is no per-id locking.

use sqlx::SqlitePool;
use thiserror::Error;

use crate::db::documents;
use crate::models::DocumentRecord;
use crate::services::{CertfyClient, CertfyError};
use crate::transform::transform;

/// Pipeline failure taxonomy. Terminal for the lookup attempt; only
/// `StoreUnavailable` is meaningfully retryable by the caller.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Cache store unreachable or failing
    #[error("Document store unavailable: {0}")]
    StoreUnavailable(String),

    /// Existence check and read disagreed, or a just-written record could
    /// not be read back; store-level consistency anomaly
    #[error("Inconsistent cache state for document {0}")]
    InconsistentCache(String),

    /// Token exchange with the verification API failed
    #[error("Authentication failed: {0}")]
    AuthFailure(String),

    /// Upstream returned a failure other than not-found
    #[error("Upstream fetch failed: {0}")]
    FetchFailure(String),

    /// Upstream does not know this document id
    #[error("Document not found upstream: {0}")]
    NotFoundUpstream(String),
}

impl LoadError {
    fn store(err: carteira_common::Error) -> Self {
        LoadError::StoreUnavailable(err.to_string())
    }

    fn auth(err: CertfyError) -> Self {
        LoadError::AuthFailure(err.to_string())
    }

    fn fetch(err: CertfyError) -> Self {
        match err {
            CertfyError::DocumentNotFound(id) => LoadError::NotFoundUpstream(id),
            other => LoadError::FetchFailure(other.to_string()),
        }
    }
}

/// Observable pipeline phase, logged at each transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    CheckingCache,
    Reading,
    Authenticating,
    FetchingRemote,
    Transforming,
    Persisting,
    ReReading,
}

fn enter(document_id: &str, phase: LoadPhase) {
    tracing::debug!(document_id, phase = ?phase, "Load pipeline phase");
}

/// Load one document: from the cache when present, otherwise fetched from
/// the verification API, transformed, persisted, and read back.
///
/// The returned record always comes from a cache read, so the cold path
/// yields exactly what a later warm lookup would yield, store-assigned
/// `created_at` included.
pub async fn load_document(
    db: &SqlitePool,
    certfy: &CertfyClient,
    document_id: &str,
) -> Result<DocumentRecord, LoadError> {
    enter(document_id, LoadPhase::CheckingCache);
    let cached = documents::document_exists(db, document_id)
        .await
        .map_err(LoadError::store)?;

    if cached {
        enter(document_id, LoadPhase::Reading);
        let record = documents::get_document(db, document_id)
            .await
            .map_err(LoadError::store)?;

        return match record {
            Some(record) => {
                tracing::info!(document_id, "Document served from cache");
                Ok(record)
            }
            // Existence said yes, read said no: a store anomaly, not a miss.
            None => Err(LoadError::InconsistentCache(document_id.to_string())),
        };
    }

    tracing::info!(document_id, "Document not cached; fetching from verification API");

    enter(document_id, LoadPhase::Authenticating);
    let token = certfy.authenticate().await.map_err(LoadError::auth)?;

    enter(document_id, LoadPhase::FetchingRemote);
    let raw = certfy
        .fetch_schedule(document_id, &token)
        .await
        .map_err(LoadError::fetch)?;

    enter(document_id, LoadPhase::Transforming);
    let content = transform(&raw, document_id, carteira_common::time::now_millis());

    enter(document_id, LoadPhase::Persisting);
    documents::save_document(db, &content)
        .await
        .map_err(LoadError::store)?;

    // Read back what the store persisted rather than returning the local
    // value: the caller sees exactly what a later cache hit would return,
    // store-assigned timestamp included.
    enter(document_id, LoadPhase::ReReading);
    let record = documents::get_document(db, document_id)
        .await
        .map_err(LoadError::store)?;

    match record {
        Some(record) => {
            tracing::info!(document_id, "Document fetched, transformed and cached");
            Ok(record)
        }
        None => Err(LoadError::InconsistentCache(document_id.to_string())),
    }
}
