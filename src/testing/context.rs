use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::adapters::MinijinjaTemplateRenderer;
use crate::app::AppContext;
use crate::domain::{OperatorSettings, UnitStatus};
use crate::testing::{CallJournal, FakePackageManager, FakeServiceManager, RecordingStatus};

pub type FakeContext =
    AppContext<FakePackageManager, FakeServiceManager, RecordingStatus, MinijinjaTemplateRenderer>;

pub const TEST_TEMPLATE: &str = "\
sysLocation {{ sysLocation }}
sysContact {{ sysContact }}
{% for acl in acls %}{{ acl }}
{% endfor %}{% for line in other %}{{ line }}
{% endfor %}";

/// Handler context wired to fakes, with a template and config path inside a
/// temporary charm directory.
pub struct TestCharm {
    pub dir: TempDir,
    pub journal: CallJournal,
    pub ctx: FakeContext,
}

impl TestCharm {
    pub fn new() -> Self {
        Self::with_template(TEST_TEMPLATE)
    }

    pub fn with_template(body: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let mut settings = OperatorSettings::for_charm_dir(dir.path());
        settings.config_path = dir.path().join("etc/snmp/snmpd.conf");
        fs::create_dir_all(&settings.template_dir).unwrap();
        fs::write(settings.template_dir.join(&settings.template_name), body).unwrap();

        let journal = CallJournal::new();
        let ctx = AppContext::new(
            settings,
            FakePackageManager::new(journal.clone()),
            FakeServiceManager::new(journal.clone()),
            RecordingStatus::new(journal.clone()),
            MinijinjaTemplateRenderer::new(),
        );
        Self { dir, journal, ctx }
    }

    /// Charm directory whose templates/ folder is empty.
    pub fn without_template() -> Self {
        let charm = Self::new();
        let settings = charm.ctx.settings();
        fs::remove_file(settings.template_dir.join(&settings.template_name)).unwrap();
        charm
    }

    pub fn config_path(&self) -> PathBuf {
        self.ctx.settings().config_path.clone()
    }

    pub fn rendered(&self) -> Option<String> {
        fs::read_to_string(self.config_path()).ok()
    }

    pub fn status_history(&self) -> Vec<UnitStatus> {
        self.ctx.status().history()
    }
}
