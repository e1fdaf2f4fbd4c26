use crate::domain::{AppError, UnitStatus};

pub trait StatusReporter {
    /// Publish the unit's workload status, replacing the previous one.
    fn set_status(&self, status: &UnitStatus) -> Result<(), AppError>;
}
