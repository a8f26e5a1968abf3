//! Default Configuration Values
//!
//! This module centralizes the default values used throughout the SDK.

/// HTTP client defaults
pub mod http {
    /// Product token placed at the front of the User-Agent header.
    pub const SDK_NAME: &str = "watson-sdk-rust";

    /// Crate version reported in the User-Agent header.
    pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Header carrying per-operation analytics.
    pub const SDK_ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";
}

/// Authentication defaults
pub mod auth {
    use std::time::Duration;

    /// IAM token endpoint.
    pub const IAM_URL: &str = "https://iam.cloud.ibm.com/identity/token";

    /// Grant type used to exchange an API key for an access token.
    pub const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

    /// Fraction of the token lifetime after which the token is refreshed.
    pub const IAM_REFRESH_FRACTION: f64 = 0.8;

    /// Timeout applied to token requests.
    pub const TOKEN_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Credentials file looked up when `IBM_CREDENTIALS_FILE` is not set.
    pub const CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";

    /// Environment variable naming an explicit credentials file.
    pub const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";
}

/// Default service endpoints
pub mod urls {
    pub const ASSISTANT: &str = "https://api.us-south.assistant.watson.cloud.ibm.com";
    pub const DISCOVERY: &str = "https://api.us-south.discovery.watson.cloud.ibm.com";
    pub const TEXT_TO_SPEECH: &str = "https://api.us-south.text-to-speech.watson.cloud.ibm.com";
    pub const VISUAL_RECOGNITION: &str =
        "https://api.us-south.visual-recognition.watson.cloud.ibm.com";
}
