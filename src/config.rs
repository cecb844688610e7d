use crate::error::{LocatorError, Result};
use crate::matcher::SearchMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// リスト文書で探す列見出し
    pub column_label: String,
    pub default_mode: SearchMode,
    pub default_fuzzy_level: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            column_label: "型番".into(),
            default_mode: SearchMode::Exact,
            default_fuzzy_level: 1,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LocatorError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home
            .join(".config")
            .join("datasheet-locator")
            .join("config.json"))
    }

    pub fn set_column_label(&mut self, label: String) -> Result<()> {
        if label.trim().is_empty() {
            return Err(LocatorError::Config("列見出しが空です".into()));
        }
        self.column_label = label;
        self.save()
    }

    pub fn set_default_mode(&mut self, mode: SearchMode) -> Result<()> {
        self.default_mode = mode;
        self.save()
    }

    pub fn set_default_fuzzy_level(&mut self, level: u8) -> Result<()> {
        if !(1..=3).contains(&level) {
            return Err(LocatorError::InvalidFuzzyLevel(level));
        }
        self.default_fuzzy_level = level;
        self.save()
    }
}
