pub mod config_changed;
pub mod install;
pub mod render;
pub mod service;
pub mod stop;
