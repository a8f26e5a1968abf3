//! Service clients, one module per API version.

#[cfg(feature = "assistant")]
pub mod assistant_v2;
#[cfg(feature = "discovery")]
pub mod discovery_v2;
#[cfg(feature = "text-to-speech")]
pub mod text_to_speech_v1;
#[cfg(feature = "visual-recognition")]
pub mod visual_recognition_v4;
