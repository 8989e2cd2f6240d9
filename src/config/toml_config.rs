use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SondeoError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| SondeoError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders with environment values. An unset
    /// variable keeps the placeholder, so validation can point at it.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn inference_endpoint(&self) -> &str {
        &self.service.endpoint
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.service.timeout_seconds
    }

    fn extra_headers(&self) -> Option<&HashMap<String, String>> {
        self.service.headers.as_ref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("service.endpoint", &self.service.endpoint)?;

        if let Some(timeout) = self.service.timeout_seconds {
            validation::validate_positive_number("service.timeout_seconds", timeout as usize, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[service]
endpoint = "https://abc123.ngrok-free.app/preguntar"
timeout_seconds = 30
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.service.endpoint,
            "https://abc123.ngrok-free.app/preguntar"
        );
        assert_eq!(config.request_timeout_seconds(), Some(30));
        assert!(config.extra_headers().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_headers_table() {
        let toml_content = r#"
[service]
endpoint = "https://example.com/preguntar"

[service.headers]
ngrok-skip-browser-warning = "true"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let headers = config.extra_headers().unwrap();
        assert_eq!(
            headers.get("ngrok-skip-browser-warning").map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SONDEO_TEST_ENDPOINT", "https://test.api.com/preguntar");

        let toml_content = r#"
[service]
endpoint = "${SONDEO_TEST_ENDPOINT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.service.endpoint, "https://test.api.com/preguntar");

        std::env::remove_var("SONDEO_TEST_ENDPOINT");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[service]
endpoint = "${SONDEO_UNSET_VAR_FOR_TEST}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        // The placeholder survives substitution and is not a valid URL.
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_bad_endpoint() {
        let toml_content = r#"
[service]
endpoint = "not-a-url"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[service]
endpoint = "https://api.example.com/preguntar"
timeout_seconds = 10
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.service.endpoint, "https://api.example.com/preguntar");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/sondeo.toml").unwrap_err();
        assert!(matches!(err, SondeoError::IoError { .. }));
    }
}
