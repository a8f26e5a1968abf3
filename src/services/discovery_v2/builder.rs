//! Builder for [`DiscoveryV2`].

use super::{DiscoveryV2, SERVICE_NAME, SERVICE_VERSION};
use watson_core::ServiceInfo;
use watson_core::builder::ServiceBuilderCore;
use watson_core::defaults::urls;

/// Configures a [`DiscoveryV2`] client.
///
/// `version` is the API release date (`YYYY-MM-DD`) sent with every call.
#[derive(Clone)]
pub struct DiscoveryV2Builder {
    pub(crate) core: ServiceBuilderCore,
}

impl DiscoveryV2Builder {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            core: ServiceBuilderCore::new(
                ServiceInfo::new(SERVICE_NAME, SERVICE_VERSION).with_version(version),
                urls::DISCOVERY,
            ),
        }
    }
}

impl_service_builder!(DiscoveryV2Builder => DiscoveryV2);
