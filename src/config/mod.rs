pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flag- and environment-driven configuration. The endpoint is never baked
/// into the binary; the deployment moves hosts without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize, clap::Args)]
pub struct CliConfig {
    /// Inference service endpoint (full URL of the query route)
    #[arg(long, env = "SONDEO_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,
}

impl ConfigProvider for CliConfig {
    fn inference_endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or_default()
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn extra_headers(&self) -> Option<&HashMap<String, String>> {
        None
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let endpoint = validation::validate_required_field("endpoint", &self.endpoint)?;
        validation::validate_url("endpoint", endpoint)?;

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout as usize, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SondeoError;

    #[test]
    fn test_validate_requires_endpoint() {
        let config = CliConfig {
            endpoint: None,
            timeout_seconds: None,
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, SondeoError::MissingConfigError { ref field } if field == "endpoint"));
    }

    #[test]
    fn test_validate_accepts_https_endpoint() {
        let config = CliConfig {
            endpoint: Some("https://abc123.ngrok-free.app/preguntar".to_string()),
            timeout_seconds: Some(30),
        };

        assert!(config.validate().is_ok());
        assert_eq!(
            config.inference_endpoint(),
            "https://abc123.ngrok-free.app/preguntar"
        );
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = CliConfig {
            endpoint: Some("https://example.com".to_string()),
            timeout_seconds: Some(0),
        };

        assert!(config.validate().is_err());
    }
}
