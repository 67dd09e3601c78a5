//! Configuration resolution for carteira-dl
//!
//! Certfy API settings resolve with ENV → TOML priority; the base URL
//! falls back to the production endpoint. Credentials have no compiled
//! default: startup fails with configuration instructions when they are
//! missing.

use carteira_common::config::TomlConfig;
use carteira_common::{Error, Result};
use tracing::warn;

use crate::services::{CertfyConfig, DEFAULT_BASE_URL};

const ENV_BASE_URL: &str = "CARTEIRA_API_BASE_URL";
const ENV_COMPANY_ID: &str = "CARTEIRA_COMPANY_ID";
const ENV_SECRET_KEY: &str = "CARTEIRA_SECRET_KEY";

/// Resolve the Certfy client configuration from ENV and TOML tiers.
pub fn resolve_certfy_config(toml_config: &TomlConfig) -> Result<CertfyConfig> {
    let base_url = resolve_value(ENV_BASE_URL, toml_config.api_base_url.as_deref())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let company_id = resolve_value(ENV_COMPANY_ID, toml_config.company_id.as_deref())
        .ok_or_else(|| missing("company id", ENV_COMPANY_ID, "company_id"))?;

    let secret_key = resolve_value(ENV_SECRET_KEY, toml_config.secret_key.as_deref())
        .ok_or_else(|| missing("secret key", ENV_SECRET_KEY, "secret_key"))?;

    Ok(CertfyConfig {
        base_url,
        company_id,
        secret_key,
    })
}

/// Single-value resolution with ENV → TOML priority.
///
/// Warns when both tiers carry a value (potential misconfiguration).
fn resolve_value(env_var: &str, toml_value: Option<&str>) -> Option<String> {
    let env_value = std::env::var(env_var).ok().filter(|v| is_valid_value(v));
    let toml_value = toml_value.filter(|v| is_valid_value(v)).map(str::to_string);

    if env_value.is_some() && toml_value.is_some() {
        warn!(
            "{} set in both environment and TOML config. Using environment (highest priority).",
            env_var
        );
    }

    env_value.or(toml_value)
}

/// Validate a configured value (non-empty, non-whitespace)
pub fn is_valid_value(value: &str) -> bool {
    !value.trim().is_empty()
}

fn missing(what: &str, env_var: &str, toml_key: &str) -> Error {
    Error::Config(format!(
        "Certfy {} not configured. Please configure using one of:\n\
         1. Environment: {}=...\n\
         2. TOML config: ~/.config/carteira/carteira-dl.toml ({} = \"...\")",
        what, env_var, toml_key
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_value() {
        assert!(is_valid_value("key"));
        assert!(!is_valid_value(""));
        assert!(!is_valid_value("   "));
    }

    #[test]
    fn test_resolution_fails_without_credentials() {
        // Relies on the CARTEIRA_* variables being unset in the test
        // environment.
        let toml_config = TomlConfig::default();
        assert!(resolve_certfy_config(&toml_config).is_err());
    }

    #[test]
    fn test_resolution_from_toml_tier() {
        let toml_config = TomlConfig {
            api_base_url: Some("http://localhost:9000/api".to_string()),
            company_id: Some("company".to_string()),
            secret_key: Some("secret".to_string()),
            ..Default::default()
        };

        let config = resolve_certfy_config(&toml_config).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/api");
        assert_eq!(config.company_id, "company");
        assert_eq!(config.secret_key, "secret");
    }

    #[test]
    fn test_base_url_defaults_to_production() {
        let toml_config = TomlConfig {
            company_id: Some("company".to_string()),
            secret_key: Some("secret".to_string()),
            ..Default::default()
        };

        let config = resolve_certfy_config(&toml_config).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
