//! Shared testing harness for `snmpd-operator` integration tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_host::FakeHost;

pub(crate) const SCENARIO_CONFIG_JSON: &str = r#"{
  "sysLocation": "datacenter-1",
  "sysContact": "ops@example.com",
  "acls": "com2sec local default public\ncom2sec mynetwork 192.0.2.0/24 public",
  "other": ""
}"#;

/// Isolated host: fake tools on PATH, the shipped templates, and a config
/// path inside a temporary directory.
pub(crate) struct TestContext {
    root: TempDir,
    pub(crate) host: FakeHost,
    settings_file: PathBuf,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        Self::with_template_dir(&shipped_templates())
    }

    pub(crate) fn with_template_dir(template_dir: &Path) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let host = FakeHost::install(root.path());
        host.set_config_json(SCENARIO_CONFIG_JSON);

        let settings_file = root.path().join("operator.toml");
        let config_path = root.path().join("etc/snmp/snmpd.conf");
        fs::write(
            &settings_file,
            format!(
                "[operator]\nconfig_path = {:?}\ntemplate_dir = {:?}\n",
                config_path.to_string_lossy(),
                template_dir.to_string_lossy()
            ),
        )
        .expect("Failed to write operator settings");

        Self { root, host, settings_file }
    }

    pub(crate) fn config_path(&self) -> PathBuf {
        self.root.path().join("etc/snmp/snmpd.conf")
    }

    pub(crate) fn rendered(&self) -> String {
        fs::read_to_string(self.config_path()).expect("snmpd.conf should have been written")
    }

    /// Replace the operator settings file passed to every invocation.
    pub(crate) fn write_settings(&self, content: &str) {
        fs::write(&self.settings_file, content).expect("Failed to write operator settings");
    }

    /// Write a YAML options file and return its path.
    pub(crate) fn write_options_yaml(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("options.yaml");
        fs::write(&path, content).expect("Failed to write options file");
        path
    }

    /// Build a command for the compiled binary with fake tools first on PATH.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("snmpd-operator").expect("Failed to locate binary");
        let path = env::var_os("PATH").unwrap_or_default();
        let mut paths = vec![self.host.bin_dir.clone()];
        paths.extend(env::split_paths(&path));

        cmd.current_dir(self.root.path())
            .env("PATH", env::join_paths(paths).expect("Failed to build PATH"))
            .env_remove("JUJU_DISPATCH_PATH")
            .env_remove("RUST_LOG")
            .arg("--settings")
            .arg(&self.settings_file);
        cmd
    }
}

pub(crate) fn shipped_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}
