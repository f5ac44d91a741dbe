use crate::commands::{AbookPaths, CmdMessage, CmdResult};
use crate::config::AbookConfig;
use crate::error::{AbookError, Result};

pub const KEYS: &[&str] = &["contacts-file", "page-size"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &AbookPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    let mut config = AbookConfig::load(dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            check_key(&key)?;
            let line = format!("{} = {}", key, value_of(&config, &key));
            result.add_message(CmdMessage::info(line));
        }
        ConfigAction::Set(key, value) => {
            match key.as_str() {
                "contacts-file" => config.set_contacts_file(&value)?,
                "page-size" => config.set_page_size(&value)?,
                other => return Err(unknown_key(other)),
            }
            config.save(dir)?;
            tracing::info!(key = %key, value = %value, "updated config");
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

pub fn value_of(config: &AbookConfig, key: &str) -> String {
    match key {
        "contacts-file" => config.contacts_file.clone(),
        "page-size" => config.page_size.to_string(),
        _ => String::new(),
    }
}

fn check_key(key: &str) -> Result<()> {
    if KEYS.contains(&key) {
        Ok(())
    } else {
        Err(unknown_key(key))
    }
}

fn unknown_key(key: &str) -> AbookError {
    let known = KEYS.join(", ");
    AbookError::Api(format!("Unknown config key: {} (known: {})", key, known))
}
