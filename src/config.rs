//! Rule table loading and persistence.
//!
//! Loads the substitution table from a JSON file next to the executable,
//! falling back to the built-in table when the file is missing or malformed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::repair::{RepairRule, RepairTable};

pub const RULES_FILE_NAME: &str = "moji_repair_rules.json";

/// Get the directory containing the executable.
pub fn exe_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Manager for loading/saving the rule table.
pub struct RulesManager {
    rules_path: PathBuf,
}

impl RulesManager {
    pub fn new() -> Self {
        Self {
            rules_path: exe_directory().join(RULES_FILE_NAME),
        }
    }

    pub fn with_path(rules_path: PathBuf) -> Self {
        Self { rules_path }
    }

    /// Get the rules file path.
    pub fn rules_file_path(&self) -> &Path {
        &self.rules_path
    }

    /// Load the rule table, falling back to the built-in one.
    pub fn load(&self) -> RepairTable {
        self.try_load().unwrap_or_else(RepairTable::builtin)
    }

    fn try_load(&self) -> Option<RepairTable> {
        if !self.rules_path.exists() {
            return None;
        }

        let content = fs::read_to_string(&self.rules_path).ok()?;
        let rules: Vec<RepairRule> = serde_json::from_str(&content).ok()?;
        if rules.is_empty() {
            return None;
        }

        Some(RepairTable::from_rules(rules))
    }

    /// Save a rule table to the rules file as pretty-printed JSON.
    pub fn save(&self, table: &RepairTable) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(table.rules())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        fs::write(&self.rules_path, json)
    }
}

impl Default for RulesManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let manager = RulesManager::with_path(dir.path().join(RULES_FILE_NAME));

        let table = manager.load();
        assert_eq!(table, RepairTable::builtin());
    }

    #[test]
    fn test_load_malformed_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RULES_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let table = RulesManager::with_path(path).load();
        assert_eq!(table, RepairTable::builtin());
    }

    #[test]
    fn test_load_custom_rules() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RULES_FILE_NAME);
        fs::write(
            &path,
            r#"[{"corrupted": "abc", "replacement": "xyz"}]"#,
        )
        .unwrap();

        let table = RulesManager::with_path(path).load();
        assert_eq!(table.len(), 1);
        assert_eq!(table.apply("abc"), "xyz");
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let manager = RulesManager::with_path(dir.path().join(RULES_FILE_NAME));

        let table = RepairTable::builtin();
        manager.save(&table).unwrap();

        assert_eq!(manager.load(), table);
    }
}
