use crate::config::AbookConfig;
use crate::model::Record;
use crate::rows::ContactRow;
use std::path::PathBuf;

pub mod add;
pub mod birthday;
pub mod config;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod list;
pub mod path;
pub mod phone;
pub mod read;
pub mod search;
pub mod show;

#[derive(Debug, Clone)]
pub struct AbookPaths {
    pub data_dir: PathBuf,
}

impl AbookPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<Record>,
    pub listed_contacts: Vec<Record>,
    pub pages: Vec<Vec<Record>>,
    pub rows: Vec<ContactRow>,
    pub days_to_birthday: Option<i64>,
    pub paths: Vec<PathBuf>,
    pub config: Option<AbookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Record>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Record>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_pages(mut self, pages: Vec<Vec<Record>>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_rows(mut self, rows: Vec<ContactRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_days_to_birthday(mut self, days: i64) -> Self {
        self.days_to_birthday = Some(days);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: AbookConfig) -> Self {
        self.config = Some(config);
        self
    }
}
