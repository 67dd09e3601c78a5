//! Schedule payload to card record transformation
//!
//! Maps the loosely-structured upstream verification payload into the flat
//! `DocumentContent`. Every extraction path is optional: a missing capture
//! section, item, or field degrades to the empty-string sentinel, never to
//! an error. Priority chains treat the empty string as absent.

use serde_json::Value;

use crate::format::{format_cpf, format_date};
use crate::influencer::generate_influencer_id;
use crate::models::{CaptureReport, DocumentContent, ScheduleReport};

/// Capture section names as declared by the upstream API
const DOCUMENT_CAPTURE: &str = "Documento de Identificação";
const PERSONAL_DATA_CAPTURE: &str = "Dados pessoais";
const LIVENESS_CAPTURE: &str = "Prova de vida";
const SIGNATURE_CAPTURE: &str = "Assinatura";

/// Asset type marking the usable signature image among the capture items
const SIGNATURE_IMAGE_TYPE: &str = "Png";

/// Personal-data form keys
const FORM_KEY_NAME: &str = "Nome";
const FORM_KEY_CPF: &str = "CPF";
const FORM_KEY_BIRTH_DATE: &str = "Data de nascimento";

const DEFAULT_RG_ISSUER: &str = "SSP";
const DEFAULT_BIRTHPLACE: &str = "São Paulo";
const NATIONALITY: &str = "Brasileira";
const ISSUE_PLACE: &str = "Brasília/DF";

/// Transform the raw upstream payload into the display-ready record.
///
/// `raw` is kept verbatim as `raw_source`; extraction works on a typed,
/// fully-optional view of it. `now_millis` feeds the influencer number
/// derivation and is injected by the caller.
pub fn transform(raw: &Value, document_id: &str, now_millis: i64) -> DocumentContent {
    let report: ScheduleReport = serde_json::from_value(raw.clone()).unwrap_or_else(|e| {
        tracing::warn!(
            document_id,
            error = %e,
            "Schedule payload did not match the expected shape; extracting nothing"
        );
        ScheduleReport::default()
    });

    let ocr = report
        .capture(DOCUMENT_CAPTURE)
        .and_then(CaptureReport::first_item)
        .and_then(|item| item.ocr_document_report.clone())
        .unwrap_or_default();

    let form = report
        .capture(PERSONAL_DATA_CAPTURE)
        .and_then(CaptureReport::first_item)
        .and_then(|item| item.capture_form_itens.clone())
        .unwrap_or_default();

    let face_image = report
        .capture(LIVENESS_CAPTURE)
        .and_then(CaptureReport::first_item)
        .and_then(|item| item.url.clone())
        .unwrap_or_default();

    // The signature section holds several capture items; the usable one is
    // the item declared as a Png asset, not necessarily the first.
    let signature_image = report
        .capture(SIGNATURE_CAPTURE)
        .and_then(|capture| {
            capture
                .items()
                .iter()
                .find(|item| item.item_type.as_deref() == Some(SIGNATURE_IMAGE_TYPE))
        })
        .and_then(|item| item.url.clone())
        .unwrap_or_default();

    let form_value = |key: &str| -> String {
        form.iter()
            .find(|entry| entry.key == key)
            .and_then(|entry| entry.value.clone())
            .unwrap_or_default()
    };

    let issue_date = format_date(report.date_completed.as_deref().unwrap_or_default());

    // The raw CPF feeds the influencer number derivation before formatting;
    // the formatted value is what the card displays.
    let raw_cpf = first_non_empty([form_value(FORM_KEY_CPF), ocr.cpf.clone().unwrap_or_default()]);
    let influencer_id = generate_influencer_id(&raw_cpf, now_millis);
    let cpf = format_cpf(&raw_cpf);

    let full_name = first_non_empty([
        form_value(FORM_KEY_NAME),
        ocr.document_name.clone().unwrap_or_default(),
        report.employee.clone().unwrap_or_default(),
    ]);

    let rg_uf = match ocr.rg.as_deref() {
        Some(rg) if !rg.is_empty() => format!(
            "{}/{}",
            rg,
            first_non_empty([
                ocr.rg_issuer.clone().unwrap_or_default(),
                DEFAULT_RG_ISSUER.to_string(),
            ])
        ),
        _ => String::new(),
    };

    let birth_date = format_date(&first_non_empty([
        form_value(FORM_KEY_BIRTH_DATE),
        ocr.birth_date.clone().unwrap_or_default(),
    ]));

    let birthplace = first_non_empty([
        ocr.birthplace_city.clone().unwrap_or_default(),
        DEFAULT_BIRTHPLACE.to_string(),
    ]);

    DocumentContent {
        id: document_id.to_string(),
        full_name,
        parent1_name: ocr.filiacao1.clone().unwrap_or_default(),
        parent2_name: ocr.filiacao2.clone().unwrap_or_default(),
        influencer_id,
        cpf,
        issue_place_and_date: format!("{} {}", ISSUE_PLACE, issue_date),
        issue_date,
        rg_uf,
        signature_image,
        birth_date,
        birthplace,
        nationality: NATIONALITY.to_string(),
        face_image,
        raw_source: raw.clone(),
    }
}

/// First non-empty candidate, or the empty sentinel
fn first_non_empty<I: IntoIterator<Item = String>>(candidates: I) -> String {
    candidates
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}
