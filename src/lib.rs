//! watson-sdk
//!
//! Async clients for IBM Watson REST services.
//!
//! Each service is a client type with one method per endpoint, built through
//! a builder that takes the API `version` date and an authenticator:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use watson::auth::IamAuthenticator;
//! use watson::services::assistant_v2::{AssistantV2, MessageInput, MessageRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), watson::WatsonError> {
//!     let assistant = AssistantV2::builder("2020-04-01")
//!         .authenticator(Arc::new(IamAuthenticator::new("api-key")?))
//!         .build()?;
//!
//!     let session = assistant.create_session("assistant-id").await?.result;
//!     let request = MessageRequest {
//!         input: Some(MessageInput::text("Hello")),
//!         ..Default::default()
//!     };
//!     let reply = assistant
//!         .message("assistant-id", &session.session_id, &request)
//!         .await?;
//!     println!("{:?}", reply.result.output.generic);
//!     Ok(())
//! }
//! ```
//!
//! Services are gated by cargo features (`assistant`, `discovery`,
//! `text-to-speech`, `visual-recognition`); all are enabled by default.
#![deny(unsafe_code)]

#[macro_use]
mod macros;

pub mod services;

pub use watson_core::{
    ErrorCategory, FileWithMetadata, HttpConfig, ServiceCore, ServiceInfo, WatsonError,
    WatsonResponse, auth, defaults, error, execution, observability, types, utils,
};

/// Common imports.
pub mod prelude {
    pub use crate::auth::{
        Authenticator, BasicAuthenticator, BearerTokenAuthenticator, IamAuthenticator,
        NoAuthAuthenticator,
    };
    pub use crate::{FileWithMetadata, HttpConfig, WatsonError, WatsonResponse};

    #[cfg(feature = "assistant")]
    pub use crate::services::assistant_v2::AssistantV2;
    #[cfg(feature = "discovery")]
    pub use crate::services::discovery_v2::DiscoveryV2;
    #[cfg(feature = "text-to-speech")]
    pub use crate::services::text_to_speech_v1::TextToSpeechV1;
    #[cfg(feature = "visual-recognition")]
    pub use crate::services::visual_recognition_v4::VisualRecognitionV4;
}
