use std::sync::Mutex;

use crate::domain::{AppError, UnitStatus};
use crate::ports::StatusReporter;
use crate::testing::CallJournal;

#[derive(Default)]
pub struct RecordingStatus {
    journal: CallJournal,
    pub history: Mutex<Vec<UnitStatus>>,
}

impl RecordingStatus {
    pub fn new(journal: CallJournal) -> Self {
        Self { journal, history: Mutex::new(Vec::new()) }
    }

    pub fn current(&self) -> Option<UnitStatus> {
        self.history.lock().unwrap().last().cloned()
    }

    pub fn history(&self) -> Vec<UnitStatus> {
        self.history.lock().unwrap().clone()
    }
}

impl StatusReporter for RecordingStatus {
    fn set_status(&self, status: &UnitStatus) -> Result<(), AppError> {
        self.journal.record(format!("status:{}", status));
        self.history.lock().unwrap().push(status.clone());
        Ok(())
    }
}
