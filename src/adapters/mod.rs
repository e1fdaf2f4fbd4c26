pub mod apt;
pub mod config_file;
pub mod hook_tools;
pub mod systemctl;
pub mod template;

pub use apt::AptCommandAdapter;
pub use config_file::YamlConfigFile;
pub use hook_tools::{ConfigGetCommand, StatusSetCommand};
pub use systemctl::SystemctlAdapter;
pub use template::MinijinjaTemplateRenderer;
