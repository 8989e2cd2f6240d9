use crate::domain::model::{InferenceResponse, Query};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Performs the single request/response exchange with the inference service.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_query(&self, endpoint: &str, query: &Query) -> Result<InferenceResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn inference_endpoint(&self) -> &str;
    fn request_timeout_seconds(&self) -> Option<u64>;
    fn extra_headers(&self) -> Option<&HashMap<String, String>>;
}
