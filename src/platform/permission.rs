use crate::platform::{PermissionRequester, PlatformError};
use async_trait::async_trait;
use tracing::info;

/// Answers permission requests from configuration.
#[derive(Debug)]
pub struct ConfiguredPermission {
    motion_granted: bool,
}

impl ConfiguredPermission {
    pub fn new(motion_granted: bool) -> Self {
        ConfiguredPermission { motion_granted }
    }
}

#[async_trait]
impl PermissionRequester for ConfiguredPermission {
    async fn request_motion_permission(&self) -> Result<bool, PlatformError> {
        info!(granted = self.motion_granted, "🔐 Motion permission requested");
        Ok(self.motion_granted)
    }
}
