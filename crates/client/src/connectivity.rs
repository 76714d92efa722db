//! Online/offline indicator.
//!
//! Purely advisory: nothing is blocked, queued or retried while offline.

use plano_core::messages;

/// Browser-style connectivity transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityEvent {
    Online,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connectivity {
    online: bool,
}

impl Connectivity {
    /// Start from the platform's current reading.
    pub fn new(online: bool) -> Self {
        Self { online }
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn apply(&mut self, event: ConnectivityEvent) {
        let online = event == ConnectivityEvent::Online;
        if online != self.online {
            tracing::info!(online, "Connectivity changed");
        }
        self.online = online;
    }

    /// Banner text while offline.
    pub fn banner(&self) -> Option<&'static str> {
        (!self.online).then_some(messages::OFFLINE_BANNER)
    }
}

impl Default for Connectivity {
    fn default() -> Self {
        Self::new(true)
    }
}
