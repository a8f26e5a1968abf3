//! Watson Visual Recognition v4
//!
//! Object detection with custom collections: analysis, collection and image
//! management, object metadata and training.
//!
//! # Architecture
//! - `builder.rs` - [`VisualRecognitionV4Builder`]
//! - `client.rs` - [`VisualRecognitionV4`], one method per endpoint
//! - `types.rs` - request and response models

pub mod builder;
mod client;
pub mod types;

#[cfg(test)]
mod tests;

pub use builder::VisualRecognitionV4Builder;
pub use client::VisualRecognitionV4;
pub use types::*;

/// Service name used for analytics and credential lookup.
pub const SERVICE_NAME: &str = "watson_vision_combined";
pub const SERVICE_VERSION: &str = "v4";
