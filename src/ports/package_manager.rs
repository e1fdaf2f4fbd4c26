use crate::domain::AppError;

pub trait PackageManager {
    /// Refresh the package index.
    ///
    /// Fails with `AppError::PackageCache`.
    fn update_cache(&self) -> Result<(), AppError>;

    /// Ensure the named package is installed.
    ///
    /// Fails with `AppError::PackageNotFound` when no source carries the
    /// package, or `AppError::PackageInstall` for any other failure.
    fn add_package(&self, name: &str) -> Result<(), AppError>;
}
