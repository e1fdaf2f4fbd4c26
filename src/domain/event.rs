//! Lifecycle events delivered by the hosting agent.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// The closed set of hooks this operator acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    Install,
    ConfigChanged,
    Stop,
}

impl LifecycleEvent {
    pub const ALL: [LifecycleEvent; 3] =
        [LifecycleEvent::Install, LifecycleEvent::ConfigChanged, LifecycleEvent::Stop];

    /// Hook name as used under `hooks/`.
    pub fn hook_name(&self) -> &'static str {
        match self {
            LifecycleEvent::Install => "install",
            LifecycleEvent::ConfigChanged => "config-changed",
            LifecycleEvent::Stop => "stop",
        }
    }

    /// Resolve the hook from a dispatch path such as `hooks/config-changed`.
    ///
    /// Returns `None` for hooks outside the handled set.
    pub fn from_dispatch_path(path: &str) -> Option<Self> {
        let name = path.trim_end_matches('/').rsplit('/').next().unwrap_or(path);
        name.parse().ok()
    }
}

impl FromStr for LifecycleEvent {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "install" => Ok(LifecycleEvent::Install),
            "config-changed" => Ok(LifecycleEvent::ConfigChanged),
            "stop" => Ok(LifecycleEvent::Stop),
            _ => Err(AppError::UnknownEvent(s.to_string())),
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hook_name())
    }
}
