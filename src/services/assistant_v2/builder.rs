//! Builder for [`AssistantV2`].

use super::{AssistantV2, SERVICE_NAME, SERVICE_VERSION};
use watson_core::ServiceInfo;
use watson_core::builder::ServiceBuilderCore;
use watson_core::defaults::urls;

/// Configures an [`AssistantV2`] client.
///
/// `version` is the API release date (`YYYY-MM-DD`) sent with every call.
#[derive(Clone)]
pub struct AssistantV2Builder {
    pub(crate) core: ServiceBuilderCore,
}

impl AssistantV2Builder {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            core: ServiceBuilderCore::new(
                ServiceInfo::new(SERVICE_NAME, SERVICE_VERSION).with_version(version),
                urls::ASSISTANT,
            ),
        }
    }
}

impl_service_builder!(AssistantV2Builder => AssistantV2);
