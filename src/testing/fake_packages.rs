use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::PackageManager;
use crate::testing::CallJournal;

/// Package manager that records calls and fails on demand.
#[derive(Default)]
pub struct FakePackageManager {
    journal: CallJournal,
    update_error: Mutex<Option<AppError>>,
    install_error: Mutex<Option<AppError>>,
    pub installed: Mutex<Vec<String>>,
}

impl FakePackageManager {
    pub fn new(journal: CallJournal) -> Self {
        Self { journal, ..Self::default() }
    }

    pub fn fail_update_with(&self, err: AppError) {
        *self.update_error.lock().unwrap() = Some(err);
    }

    pub fn fail_install_with(&self, err: AppError) {
        *self.install_error.lock().unwrap() = Some(err);
    }
}

impl PackageManager for FakePackageManager {
    fn update_cache(&self) -> Result<(), AppError> {
        self.journal.record("apt:update");
        match self.update_error.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn add_package(&self, name: &str) -> Result<(), AppError> {
        self.journal.record(format!("apt:install {}", name));
        if let Some(err) = self.install_error.lock().unwrap().take() {
            return Err(err);
        }
        self.installed.lock().unwrap().push(name.to_string());
        Ok(())
    }
}
