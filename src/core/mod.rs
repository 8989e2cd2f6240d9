pub mod client;
pub mod extract;

pub use crate::domain::model::{Profile, Query, QueryResult, QueryState};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::Result;
