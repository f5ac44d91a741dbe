use crate::error::{AbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "address_book.csv";
const DEFAULT_PAGE_SIZE: usize = 3;

/// Configuration for abook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbookConfig {
    /// Contacts file name, relative to the data dir unless absolute
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    /// Contacts per batch when listing
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for AbookConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            page_size: default_page_size(),
        }
    }
}

impl AbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AbookError::Io)?;
        let config: AbookConfig =
            serde_json::from_str(&content).map_err(AbookError::Serialization)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AbookError::Serialization)?;
        fs::write(config_path, content).map_err(AbookError::Io)?;
        Ok(())
    }

    /// Absolute location of the contacts file for a data dir.
    pub fn contacts_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.contacts_file)
    }

    /// Page size as a batch size. A zero stored by hand falls back to the default.
    pub fn batch_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size)
            .or_else(|| NonZeroUsize::new(DEFAULT_PAGE_SIZE))
            .unwrap_or(NonZeroUsize::MIN)
    }

    pub fn set_page_size(&mut self, value: &str) -> Result<()> {
        match value.parse::<usize>() {
            Ok(n) if n > 0 => {
                self.page_size = n;
                Ok(())
            }
            _ => Err(AbookError::Api(format!(
                "page-size must be a positive number, got {}",
                value
            ))),
        }
    }

    pub fn set_contacts_file(&mut self, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(AbookError::Api("contacts-file cannot be empty".into()));
        }
        self.contacts_file = value.trim().to_string();
        Ok(())
    }
}
