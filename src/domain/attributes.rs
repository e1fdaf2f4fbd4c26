//! Render-ready attribute set for the snmpd.conf template.

use serde::Serialize;

use crate::domain::CharmConfig;

/// Attributes handed to the template, serialized with the template's key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnmpdAttributes {
    #[serde(rename = "sysLocation")]
    pub sys_location: String,
    #[serde(rename = "sysContact")]
    pub sys_contact: String,
    pub acls: Vec<String>,
    pub other: Vec<String>,
}

impl SnmpdAttributes {
    /// Build attributes from a configuration snapshot.
    pub fn build(config: &CharmConfig) -> Self {
        Self {
            sys_location: config.sys_location.clone(),
            sys_contact: config.sys_contact.clone(),
            acls: trimmed_lines(&config.acls),
            other: trimmed_lines(&config.other),
        }
    }
}

/// Split text on line boundaries and trim every piece.
///
/// `\n`, `\r\n`, a lone `\r` and the Unicode line separators all end a line.
/// A final terminator does not start another line. Blank lines in between
/// survive, and an empty input yields a single empty line.
pub fn trimmed_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let normalized = text.replace("\r\n", "\n");
    let body = normalized.strip_suffix(is_line_break).unwrap_or(&normalized);
    body.split(is_line_break).map(|line| line.trim().to_string()).collect()
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}'..='\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
