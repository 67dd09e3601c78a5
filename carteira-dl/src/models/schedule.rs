//! Typed view of the upstream verification payload
//!
//! The Certfy API returns one "schedule" report per onboarding session,
//! containing named capture sections (document OCR, personal-data form,
//! liveness, signature). The shape is owned by the upstream system and
//! varies in practice, so every field here is optional and unknown fields
//! are ignored. The untouched payload is kept separately as
//! `DocumentContent::raw_source`.

use serde::{Deserialize, Serialize};

/// Top-level schedule report (`GET /Admin/Schedule/{id}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReport {
    #[serde(default)]
    pub schedule_id: Option<String>,
    /// Employee name as registered at scheduling time
    #[serde(default)]
    pub employee: Option<String>,
    /// Completion date, ISO 8601
    #[serde(default)]
    pub date_completed: Option<String>,
    #[serde(default)]
    pub captures_report: Option<Vec<CaptureReport>>,
}

/// One named capture section of the report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureReport {
    /// Declared section name; may carry surrounding whitespace
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub capture_item_report: Option<Vec<CaptureItem>>,
}

/// One captured item inside a section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureItem {
    /// Embedded OCR sub-report (identity document sections)
    #[serde(default)]
    pub ocr_document_report: Option<OcrDocumentReport>,
    /// Key/value form entries (personal-data sections).
    /// "Itens" is the upstream API's own spelling.
    #[serde(default)]
    pub capture_form_itens: Option<Vec<CaptureFormItem>>,
    /// Captured asset URL (face and signature sections)
    #[serde(default)]
    pub url: Option<String>,
    /// Declared asset type, e.g. "Png"
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
}

/// One key/value entry of a personal-data form capture
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureFormItem {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// OCR sub-report of an identity document capture.
///
/// Field names follow the upstream wire format verbatim, including its
/// mixed naming conventions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OcrDocumentReport {
    #[serde(rename = "documentName", default)]
    pub document_name: Option<String>,
    #[serde(default)]
    pub filiacao1: Option<String>,
    #[serde(default)]
    pub filiacao2: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(rename = "data_de_nascimento", default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub rg: Option<String>,
    #[serde(rename = "orgao_emissor_do_RG", default)]
    pub rg_issuer: Option<String>,
    #[serde(rename = "naturalidade_Cidade", default)]
    pub birthplace_city: Option<String>,
}

impl ScheduleReport {
    /// Find a capture section by its declared name, ignoring surrounding
    /// whitespace in the declared name.
    pub fn capture(&self, name: &str) -> Option<&CaptureReport> {
        self.captures_report
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .find(|c| c.name.trim() == name)
    }
}

impl CaptureReport {
    /// Captured items of this section, empty when the list is absent
    pub fn items(&self) -> &[CaptureItem] {
        self.capture_item_report.as_deref().unwrap_or(&[])
    }

    pub fn first_item(&self) -> Option<&CaptureItem> {
        self.items().first()
    }
}
