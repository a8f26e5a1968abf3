//! Error handling types for watson-sdk.
//!
//! Every fallible operation in the SDK returns [`WatsonError`].

mod conversions;
pub mod types;

pub use types::*;
