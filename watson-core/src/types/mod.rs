//! Shared data types.

pub mod file;
pub mod http;
pub mod response;

pub use file::FileWithMetadata;
pub use http::{HttpConfig, HttpConfigBuilder};
pub use response::WatsonResponse;
