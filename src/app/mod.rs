pub mod api;
pub mod cli;
pub mod commands;
pub mod dispatcher;
pub mod logging;
mod context;

pub use context::AppContext;
