use crate::cli::parser::InitArgs;
use crate::config::defaults::{default_config, CONFIG_FILE_NAME};
use crate::config::ConfigManager;
use crate::utils::{MeldError, Result};
use std::path::{Path, PathBuf};

pub fn execute(args: InitArgs) -> Result<()> {
    let path = args.path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    write_default(&path, args.force)?;
    println!("📝 Created {}", path.display());
    Ok(())
}

pub fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(MeldError::config_error(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    ConfigManager::save_to_path(&default_config(), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_default_creates_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("meld.json");

        write_default(&path, false).unwrap();
        let loaded = ConfigManager::load_from_file(&path).unwrap();
        assert_eq!(loaded, default_config());
    }

    #[test]
    fn test_write_default_does_not_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("meld.json");
        fs::write(&path, "existing content").unwrap();

        let err = write_default(&path, false).unwrap_err();
        assert!(matches!(err, MeldError::Config { .. }));
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing content");

        write_default(&path, true).unwrap();
        assert!(ConfigManager::load_from_file(&path).is_ok());
    }
}
