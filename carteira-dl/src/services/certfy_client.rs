//! Certfy onboarding API client
//!
//! Exchanges service credentials for a bearer token, then retrieves raw
//! schedule reports by document id. The payload body is returned as opaque
//! JSON; interpreting it is the transform's job.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Production API endpoint; override via configuration for testing
pub const DEFAULT_BASE_URL: &str = "https://api.certfy.tech/onboarding/api";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Certfy client errors
#[derive(Debug, Error)]
pub enum CertfyError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication rejected ({status}): {body}")]
    AuthRejected { status: u16, body: String },

    #[error("Access token missing from authentication response")]
    TokenMissing,

    #[error("Document not found upstream: {0}")]
    DocumentNotFound(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Immutable client configuration, injected at construction.
///
/// Credentials are fixed service credentials resolved once at startup;
/// the client never reads ambient state.
#[derive(Debug, Clone)]
pub struct CertfyConfig {
    pub base_url: String,
    pub company_id: String,
    pub secret_key: String,
}

/// Bearer token returned by the authentication endpoint
#[derive(Debug, Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenRequest<'a> {
    company_id: &'a str,
    secret_key: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Certfy API client
#[derive(Clone)]
pub struct CertfyClient {
    http_client: reqwest::Client,
    config: CertfyConfig,
}

impl CertfyClient {
    pub fn new(config: CertfyConfig) -> Result<Self, CertfyError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CertfyError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Exchange the service credentials for a bearer token.
    ///
    /// `POST {base}/Authentication/Token` with `{companyId, secretKey}`.
    /// A non-success status or a response without a usable `accessToken`
    /// field is an authentication failure, surfacing status and body.
    pub async fn authenticate(&self) -> Result<AccessToken, CertfyError> {
        let url = format!("{}/Authentication/Token", self.config.base_url);
        tracing::debug!(url = %url, company_id = %self.config.company_id, "Requesting access token");

        let response = self
            .http_client
            .post(&url)
            .json(&TokenRequest {
                company_id: &self.config.company_id,
                secret_key: &self.config.secret_key,
            })
            .send()
            .await
            .map_err(|e| CertfyError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CertfyError::AuthRejected {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CertfyError::Parse(e.to_string()))?;

        match token.access_token {
            Some(token) if !token.is_empty() => {
                tracing::debug!("Access token received");
                Ok(AccessToken(token))
            }
            _ => Err(CertfyError::TokenMissing),
        }
    }

    /// Fetch the raw schedule report for one document id.
    ///
    /// `GET {base}/Admin/Schedule/{id}` with a bearer header. 404 is the
    /// distinguished not-found outcome; any other non-success status
    /// surfaces the upstream status and body for diagnostics.
    pub async fn fetch_schedule(
        &self,
        document_id: &str,
        token: &AccessToken,
    ) -> Result<Value, CertfyError> {
        let url = format!("{}/Admin/Schedule/{}", self.config.base_url, document_id);
        tracing::debug!(document_id, url = %url, "Fetching schedule report");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| CertfyError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CertfyError::DocumentNotFound(document_id.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CertfyError::Api(status.as_u16(), body));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| CertfyError::Parse(e.to_string()))?;

        tracing::info!(document_id, "Retrieved schedule report from Certfy");

        Ok(payload)
    }
}
