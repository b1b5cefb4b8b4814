//! Project configuration store
//!
//! The initializer records two derived entries (`namespace-paths` and
//! `name`); everything else about the file is owned by whoever consumes
//! the project later. The store is an explicit capability object handed
//! into the orchestrator, never ambient state.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file created in the project root.
pub const CONFIG_FILE: &str = "extforge.json";

/// Write access to the project configuration.
pub trait ConfigStore {
    fn set(&mut self, key: &str, value: Value);
}

/// File-backed config store persisting a flat JSON object.
#[derive(Debug)]
pub struct JsonConfig {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl JsonConfig {
    /// Load the config for a project, starting empty if the file does not
    /// exist yet.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE);

        let entries = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read project config: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse project config: {}", path.display()))?
        } else {
            Map::new()
        };

        Ok(Self { path, entries })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Persist the current entries to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(&Value::Object(self.entries.clone()))?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write project config: {}", self.path.display()))
    }
}

impl ConfigStore for JsonConfig {
    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn load_missing_starts_empty() {
        let tmp = TempDir::new().unwrap();
        let config = JsonConfig::load(tmp.path()).unwrap();
        assert!(config.get("name").is_none());
    }

    #[test]
    fn set_save_and_reload() {
        let tmp = TempDir::new().unwrap();

        let mut config = JsonConfig::load(tmp.path()).unwrap();
        config.set("name", json!("my_app"));
        config.set("namespace-paths", json!({ "My\\App\\": "my/app" }));
        config.save().unwrap();

        let reloaded = JsonConfig::load(tmp.path()).unwrap();
        assert_eq!(reloaded.get("name"), Some(&json!("my_app")));
        assert_eq!(
            reloaded.get("namespace-paths"),
            Some(&json!({ "My\\App\\": "my/app" }))
        );
    }

    #[test]
    fn set_overwrites_existing_key() {
        let tmp = TempDir::new().unwrap();

        let mut config = JsonConfig::load(tmp.path()).unwrap();
        config.set("name", json!("first"));
        config.set("name", json!("second"));

        assert_eq!(config.get("name"), Some(&json!("second")));
    }

    #[test]
    fn load_rejects_malformed_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "not json").unwrap();

        assert!(JsonConfig::load(tmp.path()).is_err());
    }
}
