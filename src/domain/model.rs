use serde::{Deserialize, Serialize};

use crate::core::extract::extract_answer;
use crate::utils::error::SondeoError;

/// Respondent segment the remote model answers as.
///
/// The wire identifiers are fixed literals shared with the inference service;
/// changing one requires a coordinated service-side update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    /// Mexico City, NSE C-/D+, ages 18-25.
    #[serde(rename = "cdmx_c-d+_18-25")]
    CdmxYoungWorking,
    /// Monterrey, NSE B/C+, ages 40-60.
    #[serde(rename = "mty_b-c+_40-60")]
    MtyMiddleOlder,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::CdmxYoungWorking, Profile::MtyMiddleOlder];

    pub fn id(&self) -> &'static str {
        match self {
            Profile::CdmxYoungWorking => "cdmx_c-d+_18-25",
            Profile::MtyMiddleOlder => "mty_b-c+_40-60",
        }
    }

    pub fn valid_ids() -> String {
        Profile::ALL
            .iter()
            .map(|p| p.id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::str::FromStr for Profile {
    type Err = SondeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| SondeoError::InvalidConfigValueError {
                field: "profile".to_string(),
                value: s.to_string(),
                reason: format!("Unknown profile id. Valid profiles: {}", Profile::valid_ids()),
            })
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Request body for one submission, serialized as
/// `{"question": ..., "profile": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct Query {
    pub question: String,
    pub profile: Profile,
}

/// Reply body from the inference service.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub raw_text: String,
    pub extracted_answer: String,
}

impl QueryResult {
    pub fn from_raw(raw: String) -> Self {
        let extracted_answer = extract_answer(&raw).to_string();
        Self {
            raw_text: raw,
            extracted_answer,
        }
    }
}

/// Published view state of the client. Exactly one writer (the client);
/// readers take clones.
#[derive(Debug, Clone, Default)]
pub enum QueryState {
    #[default]
    Idle,
    Pending,
    HasResult(QueryResult),
    HasError(SondeoError),
}
