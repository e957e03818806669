use super::{AgentConfig, AgentName, Configuration, IdeConfig, IdeName};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "meld.json";
pub const CONFIG_PATH_ENV_VAR: &str = "MELD_CONFIG_PATH";

pub fn default_config() -> Configuration {
    Configuration {
        projects: Value::Array(Vec::new()),
        agents: default_agents(),
        mcp: IndexMap::new(),
        ide: default_ide_config(),
        context: None,
        extra: Map::new(),
    }
}

pub fn default_agents() -> IndexMap<AgentName, AgentConfig> {
    AgentName::ALL
        .into_iter()
        .map(|name| {
            let agent = AgentConfig {
                enabled: true,
                overrides: None,
                extra: Map::new(),
            };
            (name, agent)
        })
        .collect()
}

pub fn default_ide_config() -> IdeConfig {
    IdeConfig {
        default: IdeName::Code,
        workspace_name: "workspace".to_string(),
        extra: Map::new(),
    }
}

pub fn get_default_config_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "meld") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        PathBuf::from(".config").join("meld")
    }
}

pub fn get_user_config_file_path() -> PathBuf {
    get_default_config_dir().join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validate;

    #[test]
    fn test_default_config_passes_validation() {
        let value = serde_json::to_value(default_config()).unwrap();
        let result = validate(&value);
        assert!(result.is_valid(), "errors: {:?}", result.errors());
        assert_eq!(result.config(), Some(&default_config()));
    }

    #[test]
    fn test_default_agents_cover_every_agent() {
        let agents = default_agents();
        assert_eq!(agents.len(), AgentName::ALL.len());
        assert!(agents.values().all(|agent| agent.enabled));
    }

    #[test]
    fn test_user_config_path_file_name() {
        let path = get_user_config_file_path();
        assert!(path.ends_with("config.json"));
        assert!(path.to_string_lossy().contains("meld"));
    }
}
