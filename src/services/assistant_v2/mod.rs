//! Watson Assistant v2
//!
//! Sessions, stateful and stateless messages, bulk classification and logs.
//!
//! # Architecture
//! - `builder.rs` - [`AssistantV2Builder`]
//! - `client.rs` - [`AssistantV2`], one method per endpoint
//! - `types.rs` - request and response models

pub mod builder;
mod client;
pub mod types;


pub use builder::AssistantV2Builder;
pub use client::AssistantV2;
pub use types::*;

/// Service name used for analytics and credential lookup.
pub const SERVICE_NAME: &str = "conversation";
pub const SERVICE_VERSION: &str = "v2";
