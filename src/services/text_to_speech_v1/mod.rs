//! Watson Text to Speech v1
//!
//! Voices, synthesis, pronunciation, custom models with words and prompts,
//! and speaker models.

pub mod builder;
mod client;
pub mod types;
pub mod wav;

#[cfg(test)]
mod tests;

pub use builder::TextToSpeechV1Builder;
pub use client::TextToSpeechV1;
pub use types::*;

pub const SERVICE_NAME: &str = "text_to_speech";
pub const SERVICE_VERSION: &str = "v1";
