use crate::domain::model::{InferenceResponse, Query};
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::{Result, SondeoError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::time::Duration;

/// reqwest-backed transport for the inference service.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Builds the underlying client from the configured timeout and default
    /// headers. The observed deployment sits behind a tunnel host, which
    /// wants a browser-warning bypass header on every request.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(secs) = config.request_timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Some(headers) = config.extra_headers() {
            let mut map = HeaderMap::new();
            for (key, value) in headers {
                let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                    SondeoError::InvalidConfigValueError {
                        field: "service.headers".to_string(),
                        value: key.clone(),
                        reason: format!("Invalid header name: {}", e),
                    }
                })?;
                let value = HeaderValue::from_str(value).map_err(|e| {
                    SondeoError::InvalidConfigValueError {
                        field: "service.headers".to_string(),
                        value: value.clone(),
                        reason: format!("Invalid header value: {}", e),
                    }
                })?;
                map.insert(name, value);
            }
            builder = builder.default_headers(map);
        }

        let client = builder.build()?;
        Ok(Self { client })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_query(&self, endpoint: &str, query: &Query) -> Result<InferenceResponse> {
        tracing::debug!("📡 POST {}", endpoint);
        let response = self.client.post(endpoint).json(query).send().await?;

        tracing::debug!("📡 inference service status: {}", response.status());
        if !response.status().is_success() {
            // Only the status travels up; the body is not parsed for detail.
            return Err(SondeoError::ServiceError {
                status: response.status().as_u16(),
            });
        }

        let reply: InferenceResponse = response.json().await?;
        Ok(reply)
    }
}
