pub mod cli;
pub mod config;
pub mod utils;

pub use config::{
    validate, AgentConfig, AgentName, ConfigManager, Configuration, IdeConfig, IdeName,
    McpServerConfig, ValidationResult,
};
pub use utils::{MeldError, Result};
