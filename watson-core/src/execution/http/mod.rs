//! HTTP Utilities
//!
//! - HTTP client configuration
//! - Header management
//! - HTTP interceptors

pub mod client;
pub mod headers;
pub mod interceptor;

pub use client::*;
pub use headers::*;
pub use interceptor::*;
