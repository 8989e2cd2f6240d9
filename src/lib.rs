pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpTransport;
pub use config::toml_config::TomlConfig;
pub use config::CliConfig;
pub use core::client::QueryClient;
pub use core::extract::{extract_answer, ANSWER_MARKER};
pub use domain::model::{Profile, Query, QueryResult, QueryState};
pub use domain::ports::{ConfigProvider, Transport};
pub use utils::error::{ErrorCategory, ErrorSeverity, Result, SondeoError};
