mod context;
mod fake_packages;
mod fake_services;
mod journal;
mod recording_status;

pub use context::TestCharm;
pub use fake_config::StaticConfig;
pub use fake_packages::FakePackageManager;
pub use fake_services::FakeServiceManager;
pub use journal::CallJournal;
pub use recording_status::RecordingStatus;
