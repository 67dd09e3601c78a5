//! Cached identity card record
//!
//! `DocumentContent` is the flat, display-ready projection of one identity
//! document as produced by the transform. `DocumentRecord` is the same
//! content once persisted, carrying the store-assigned creation timestamp.
//! Records are written once per document id and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display-ready card fields, before persistence.
///
/// Every field is a `String`; the empty string is the explicit
/// "unknown / not provided" sentinel. The record never carries nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContent {
    /// Upstream document identifier, primary key in the cache
    pub id: String,
    /// Card holder's full name
    pub full_name: String,
    /// First filiation line (parent name) from document OCR
    pub parent1_name: String,
    /// Second filiation line (parent name) from document OCR
    pub parent2_name: String,
    /// Derived influencer number (display decoration, `XXXX-XX`)
    pub influencer_id: String,
    /// CPF formatted as `XXX.XXX.XXX-XX`
    pub cpf: String,
    /// Card issue date, `DD/MM/YYYY`
    pub issue_date: String,
    /// RG number with issuing body, `{rg}/{issuer}`
    pub rg_uf: String,
    /// Signature capture asset URL
    pub signature_image: String,
    /// Birth date, `DD/MM/YYYY`
    pub birth_date: String,
    /// Birthplace city
    pub birthplace: String,
    /// Nationality
    pub nationality: String,
    /// Issue place followed by the issue date
    pub issue_place_and_date: String,
    /// Liveness/face capture asset URL
    pub face_image: String,
    /// Opaque copy of the upstream payload, kept for audit and debugging;
    /// never parsed again once the record exists
    pub raw_source: Value,
}

/// One cached card record as read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    #[serde(flatten)]
    pub content: DocumentContent,
    /// Creation timestamp, assigned by the store exactly once at first
    /// persistence; never supplied by the caller
    pub created_at: DateTime<Utc>,
}
