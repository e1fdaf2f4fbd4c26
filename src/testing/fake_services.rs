use std::collections::BTreeSet;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ServiceManager;
use crate::testing::CallJournal;

/// Service manager that tracks which units it considers running.
#[derive(Default)]
pub struct FakeServiceManager {
    journal: CallJournal,
    running: Mutex<BTreeSet<String>>,
    failing_action: Mutex<Option<String>>,
}

impl FakeServiceManager {
    pub fn new(journal: CallJournal) -> Self {
        Self { journal, ..Self::default() }
    }

    /// Make every subsequent `action` ("start", "stop", "restart") fail.
    pub fn fail_on(&self, action: &str) {
        *self.failing_action.lock().unwrap() = Some(action.to_string());
    }

    fn apply(&self, action: &str, service: &str) -> Result<(), AppError> {
        self.journal.record(format!("systemctl:{} {}", action, service));
        if self.failing_action.lock().unwrap().as_deref() == Some(action) {
            return Err(AppError::ServiceCommand {
                action: action.to_string(),
                service: service.to_string(),
                details: format!("Unit {} not found.", service),
            });
        }
        Ok(())
    }
}

impl ServiceManager for FakeServiceManager {
    fn start(&self, service: &str) -> Result<(), AppError> {
        self.apply("start", service)?;
        self.running.lock().unwrap().insert(service.to_string());
        Ok(())
    }

    fn stop(&self, service: &str) -> Result<(), AppError> {
        self.apply("stop", service)?;
        self.running.lock().unwrap().remove(service);
        Ok(())
    }

    fn restart(&self, service: &str) -> Result<(), AppError> {
        self.apply("restart", service)?;
        self.running.lock().unwrap().insert(service.to_string());
        Ok(())
    }

    fn is_active(&self, service: &str) -> Result<bool, AppError> {
        Ok(self.running.lock().unwrap().contains(service))
    }
}
