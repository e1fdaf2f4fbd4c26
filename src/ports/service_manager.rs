use crate::domain::AppError;

pub trait ServiceManager {
    fn start(&self, service: &str) -> Result<(), AppError>;

    fn stop(&self, service: &str) -> Result<(), AppError>;

    /// Restart the unit. Does not wait for it to report running.
    fn restart(&self, service: &str) -> Result<(), AppError>;

    /// Whether the unit is currently active.
    fn is_active(&self, service: &str) -> Result<bool, AppError>;
}
