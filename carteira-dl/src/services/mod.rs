//! External service clients

pub mod certfy_client;

pub use certfy_client::{AccessToken, CertfyClient, CertfyConfig, CertfyError, DEFAULT_BASE_URL};
