use crate::commands::{CmdMessage, CmdResult};
use crate::config::BlogConfig;
use crate::error::{BlogError, Result};
use log::{info, warn};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = BlogConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = BlogConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = load_for_update(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let msg = match e {
                    BlogError::Config(msg) => msg,
                    other => other.to_string(),
                };
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(msg));
                return Ok(result);
            }
            config.save(dir)?;
            info!("saved {} = {} to {}", key, value, dir.display());
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

/// A stored file with unusable values is replaced rather than blocking the
/// command that would fix it.
fn load_for_update(dir: &Path) -> Result<BlogConfig> {
    match BlogConfig::load(dir) {
        Ok(config) => Ok(config),
        Err(e @ (BlogError::InvalidPageSize(_) | BlogError::Serialization(_))) => {
            warn!("ignoring unusable config in {}: {}", dir.display(), e);
            Ok(BlogConfig::default())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn show_all_returns_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(BlogConfig::default()));
    }

    #[test]
    fn set_persists() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("page-size".into(), "7".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(BlogConfig::load(dir.path()).unwrap().page_size, 7);

        let shown = run(dir.path(), ConfigAction::ShowKey("page-size".into())).unwrap();
        assert_eq!(shown.messages[0].content, "7");
    }

    #[test]
    fn invalid_values_are_reported_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("page-size".into(), "0".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("theme".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.contains("theme"));
    }

    #[test]
    fn set_repairs_an_unusable_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), r#"{"page_size":0}"#).unwrap();
        assert!(run(dir.path(), ConfigAction::ShowAll).is_err());

        let result = run(
            dir.path(),
            ConfigAction::Set("page-size".into(), "5".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(BlogConfig::load(dir.path()).unwrap().page_size, 5);
    }

    #[test]
    fn set_replaces_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

        run(
            dir.path(),
            ConfigAction::Set("page-size".into(), "3".into()),
        )
        .unwrap();
        assert_eq!(BlogConfig::load(dir.path()).unwrap().page_size, 3);
    }
}
