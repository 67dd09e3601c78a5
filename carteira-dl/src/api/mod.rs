//! HTTP API for the card viewer shell

pub mod documents;
pub mod health;

pub use documents::document_routes;
pub use health::health_routes;
