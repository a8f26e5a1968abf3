//! Builder for [`VisualRecognitionV4`].

use super::{SERVICE_NAME, SERVICE_VERSION, VisualRecognitionV4};
use watson_core::ServiceInfo;
use watson_core::builder::ServiceBuilderCore;
use watson_core::defaults::urls;

/// Configures a [`VisualRecognitionV4`] client.
#[derive(Clone)]
pub struct VisualRecognitionV4Builder {
    pub(crate) core: ServiceBuilderCore,
}

impl VisualRecognitionV4Builder {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            core: ServiceBuilderCore::new(
                ServiceInfo::new(SERVICE_NAME, SERVICE_VERSION).with_version(version),
                urls::VISUAL_RECOGNITION,
            ),
        }
    }
}

impl_service_builder!(VisualRecognitionV4Builder => VisualRecognitionV4);
