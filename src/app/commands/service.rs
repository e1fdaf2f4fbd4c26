//! Direct service control outside of a hook.
//!
//! No status is published here: `status-set` only works inside a hook.

use tracing::info;

use crate::domain::AppError;
use crate::ports::ServiceManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    Start,
    Stop,
    Restart,
}

impl ServiceAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceAction::Start => "start",
            ServiceAction::Stop => "stop",
            ServiceAction::Restart => "restart",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            ServiceAction::Start => "started",
            ServiceAction::Stop => "stopped",
            ServiceAction::Restart => "restarted",
        }
    }
}

pub fn control<S: ServiceManager>(
    services: &S,
    service: &str,
    action: ServiceAction,
) -> Result<(), AppError> {
    match action {
        ServiceAction::Start => services.start(service)?,
        ServiceAction::Stop => services.stop(service)?,
        ServiceAction::Restart => services.restart(service)?,
    }
    info!(action = action.as_str(), service, "service command completed");
    Ok(())
}

/// `true` when the unit is running.
pub fn is_active<S: ServiceManager>(services: &S, service: &str) -> Result<bool, AppError> {
    let active = services.is_active(service)?;
    info!(service, active, "service state queried");
    Ok(active)
}
