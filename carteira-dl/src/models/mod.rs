//! Data models for carteira-dl

pub mod document;
pub mod schedule;

pub use document::{DocumentContent, DocumentRecord};
pub use schedule::{CaptureItem, CaptureReport, OcrDocumentReport, ScheduleReport};
