use crate::config::AgentName;
use crate::utils::logging::LogLevel;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "meld")]
#[command(about = "Validate meld agent, IDE, and MCP server configuration")]
#[command(version)]
pub struct Cli {
    /// Log verbosity (overrides MELD_LOG)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a config file and report every problem found
    Validate(ValidateArgs),
    /// Print a validated config as JSON
    Show(ShowArgs),
    /// Write a starter config file
    Init(InitArgs),
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Config file (defaults to MELD_CONFIG_PATH, ./meld.json, then the user config)
    pub path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Config file (defaults to MELD_CONFIG_PATH, ./meld.json, then the user config)
    pub path: Option<PathBuf>,

    /// Only print the MCP servers available to this agent
    #[arg(long, short = 'a')]
    pub agent: Option<AgentName>,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the config (defaults to ./meld.json)
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long, short = 'f')]
    pub force: bool,
}
