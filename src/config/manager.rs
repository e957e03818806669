use super::defaults::{get_user_config_file_path, CONFIG_FILE_NAME, CONFIG_PATH_ENV_VAR};
use super::{validate, Configuration};
use crate::utils::{MeldError, Result};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct ConfigManager;

impl ConfigManager {
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        let env_path = std::env::var(CONFIG_PATH_ENV_VAR).ok();
        Self::resolve_path_from(explicit, env_path.as_deref(), Path::new("."))
    }

    /// Explicit path, then `MELD_CONFIG_PATH`, then `meld.json` in `cwd` when
    /// present, then the per-user config file.
    pub fn resolve_path_from(explicit: Option<&Path>, env_path: Option<&str>, cwd: &Path) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        if let Some(path) = env_path.filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }

        let local = cwd.join(CONFIG_FILE_NAME);
        if local.exists() {
            local
        } else {
            get_user_config_file_path()
        }
    }

    pub fn load_value(path: &Path) -> Result<Value> {
        if !path.exists() {
            return Err(MeldError::file_not_found(path.display().to_string()));
        }
        if path.is_dir() {
            return Err(MeldError::config_error(format!(
                "{} is a directory, not a config file",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        let value = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config document");
        Ok(value)
    }

    pub fn load_from_file(path: &Path) -> Result<Configuration> {
        let value = Self::load_value(path)?;
        validate(&value).into_result()
    }

    pub fn save_to_path(config: &Configuration, path: &Path) -> Result<()> {
        let value = serde_json::to_value(config)?;
        validate(&value).into_result()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&value)?;
        let mut file = fs::File::create(path)?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        file.sync_all()?;

        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }
}
