//! Builder for [`TextToSpeechV1`].

use super::{SERVICE_NAME, SERVICE_VERSION, TextToSpeechV1};
use watson_core::ServiceInfo;
use watson_core::builder::ServiceBuilderCore;
use watson_core::defaults::urls;

/// Configures a [`TextToSpeechV1`] client. The API is not versioned by date.
#[derive(Clone)]
pub struct TextToSpeechV1Builder {
    pub(crate) core: ServiceBuilderCore,
}

impl TextToSpeechV1Builder {
    pub fn new() -> Self {
        Self {
            core: ServiceBuilderCore::new(
                ServiceInfo::new(SERVICE_NAME, SERVICE_VERSION),
                urls::TEXT_TO_SPEECH,
            ),
        }
    }
}

impl Default for TextToSpeechV1Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl_service_builder!(TextToSpeechV1Builder => TextToSpeechV1);
