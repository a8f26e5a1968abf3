//! watson-core
//!
//! Service-agnostic runtime shared by the Watson service clients:
//! authentication, request building, response decoding and configuration.
#![deny(unsafe_code)]

pub mod auth;
pub mod builder;
pub mod defaults;
pub mod error;
pub mod execution;
pub mod observability;
pub mod service;
pub mod types;
pub mod utils;

pub use error::{ErrorCategory, WatsonError};
pub use service::{ServiceCore, ServiceInfo};
pub use types::{FileWithMetadata, HttpConfig, WatsonResponse};
