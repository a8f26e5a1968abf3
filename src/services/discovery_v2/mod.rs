//! Watson Discovery v2
//!
//! Projects, collections, documents, queries, training data and enrichments.
//!
//! # Architecture
//! - `builder.rs` - [`DiscoveryV2Builder`]
//! - `client.rs` - [`DiscoveryV2`], one method per endpoint
//! - `types/` - request and response models; query aggregations live in
//!   their own module

pub mod builder;
mod client;
pub mod types;

#[cfg(test)]
mod tests;

pub use builder::DiscoveryV2Builder;
pub use client::DiscoveryV2;
pub use types::*;

/// Service name used for analytics and credential lookup.
pub const SERVICE_NAME: &str = "discovery";
pub const SERVICE_VERSION: &str = "v2";
