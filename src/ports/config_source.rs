use crate::domain::{AppError, ConfigValues};

pub trait ConfigSource {
    /// Read the current option values.
    fn load(&self) -> Result<ConfigValues, AppError>;
}

impl<C: ConfigSource + ?Sized> ConfigSource for &C {
    fn load(&self) -> Result<ConfigValues, AppError> {
        (**self).load()
    }
}
