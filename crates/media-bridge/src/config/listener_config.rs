use crate::config::{default_listener_class, default_listener_package};

use media_bridge_core::ListenerComponent;
use serde::{Deserialize, Serialize};

/// Identity of the notification listener whose access is checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenerConfig {
    /// Package that owns the listener.
    #[serde(default = "default_listener_package")]
    pub package: String,
    /// Fully qualified listener class.
    #[serde(default = "default_listener_class")]
    pub class: String,
}

impl ListenerConfig {
    /// Component as matched against the enabled-listeners setting.
    pub fn component(&self) -> ListenerComponent {
        ListenerComponent::new(&self.package, &self.class)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            package: default_listener_package(),
            class: default_listener_class(),
        }
    }
}
