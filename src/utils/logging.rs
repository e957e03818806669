use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `meld=debug`.
pub const LOG_ENV_VAR: &str = "MELD_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Picks the filter directive: explicit level, then `MELD_LOG`, then `warn`.
pub fn resolve_directive(level: Option<LogLevel>, env_value: Option<String>) -> String {
    match (level, env_value) {
        (Some(level), _) => level.as_directive().to_string(),
        (None, Some(directive)) if !directive.trim().is_empty() => directive,
        _ => DEFAULT_DIRECTIVE.to_string(),
    }
}

/// Installs a stderr subscriber so diagnostics never mix with command output.
pub fn init_logging(level: Option<LogLevel>) -> anyhow::Result<()> {
    let directive = resolve_directive(level, std::env::var(LOG_ENV_VAR).ok());
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter '{directive}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))
}
