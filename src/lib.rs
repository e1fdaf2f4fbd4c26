//! snmpd-operator: lifecycle handlers that install snmpd, render its
//! configuration and drive its systemd unit.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{dispatch_from_env, render_preview, run_hook};
pub use app::dispatcher::dispatch;
pub use domain::{
    AppError, CharmConfig, LifecycleEvent, OperatorSettings, SnmpdAttributes, UnitStatus,
};
