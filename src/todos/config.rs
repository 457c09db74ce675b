use crate::error::{Result, TodoError};
use crate::render::DEFAULT_PAGE_TITLE;
use crate::todos::TODO_LIST_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for todos, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// Key the todo list is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Title of the rendered page
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

fn default_storage_key() -> String {
    TODO_LIST_KEY.to_string()
}

fn default_page_title() -> String {
    DEFAULT_PAGE_TITLE.to_string()
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            page_title: default_page_title(),
        }
    }
}

impl TodoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        let config: TodoConfig =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodoError::Serialization)?;
        fs::write(config_path, content).map_err(TodoError::Io)?;
        Ok(())
    }

    /// Read a setting by its command-line name.
    pub fn get(&self, key: &str) -> Result<&str> {
        match key {
            "storage-key" => Ok(self.storage_key.as_str()),
            "page-title" => Ok(self.page_title.as_str()),
            other => Err(TodoError::Api(format!("Unknown config key: {}", other))),
        }
    }

    /// Change a setting by its command-line name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                if value.trim().is_empty() {
                    return Err(TodoError::Api("storage-key cannot be empty".into()));
                }
                self.storage_key = value.to_string();
            }
            "page-title" => self.page_title = value.to_string(),
            other => return Err(TodoError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["storage-key", "page-title"]
    }
}
