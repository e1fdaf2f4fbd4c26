pub mod attributes;
pub mod charm_config;
pub mod error;
pub mod event;
pub mod settings;
pub mod status;

pub use attributes::SnmpdAttributes;
pub use charm_config::{CharmConfig, ConfigValues};
pub use error::AppError;
pub use event::LifecycleEvent;
pub use settings::OperatorSettings;
pub use status::UnitStatus;
