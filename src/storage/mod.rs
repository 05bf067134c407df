//! Session persistence. The browser build kept the bearer token in local
//! storage under a fixed key; here the same key/value pairs live in a JSON
//! session file under the config directory.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::config;

/// Fixed key the bearer token is persisted under.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct SessionData {
    entries: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct SessionStorage {
    dir: PathBuf,
}

impl SessionStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Resolve the storage directory from config, falling back to
    /// `$HOME/.config/kanban/cli`.
    pub fn from_config() -> anyhow::Result<Self> {
        let dir = match &config::config().storage.config_dir {
            Some(dir) => dir.clone(),
            None => {
                let home = std::env::var("HOME")
                    .map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
                PathBuf::from(home).join(".config").join("kanban").join("cli")
            }
        };
        Ok(Self { dir })
    }

    fn session_file(&self) -> PathBuf {
        self.dir.join("session.json")
    }

    fn load(&self) -> anyhow::Result<SessionData> {
        let file = self.session_file();
        if !file.exists() {
            return Ok(SessionData::default());
        }
        let content = fs::read_to_string(file)?;
        let data: SessionData = serde_json::from_str(&content)?;
        Ok(data)
    }

    fn save(&self, data: &SessionData) -> anyhow::Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        let content = serde_json::to_string_pretty(data)?;
        fs::write(self.session_file(), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.load()?.entries.get(key).cloned())
    }

    pub fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut data = self.load()?;
        data.entries.insert(key.to_string(), value.to_string());
        self.save(&data)
    }

    pub fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut data = self.load()?;
        if data.entries.remove(key).is_some() {
            self.save(&data)?;
        }
        Ok(())
    }
}
