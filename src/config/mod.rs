use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

pub mod defaults;
pub mod manager;
pub mod validation;

pub use manager::ConfigManager;
pub use validation::{validate, ValidationResult};

/// Agent integrations a configuration can enable and scope MCP servers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentName {
    ClaudeCode,
    CodexCli,
    GeminiCli,
}

impl AgentName {
    pub const ALL: [AgentName; 3] = [
        AgentName::ClaudeCode,
        AgentName::CodexCli,
        AgentName::GeminiCli,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentName::ClaudeCode => "claude-code",
            AgentName::CodexCli => "codex-cli",
            AgentName::GeminiCli => "gemini-cli",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|agent| agent.as_str() == name)
    }

    /// `claude-code, codex-cli, gemini-cli`
    pub fn joined() -> String {
        Self::ALL.map(AgentName::as_str).join(", ")
    }
}

impl fmt::Display for AgentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Invalid agent name: {}. Must be one of: {}",
                s,
                Self::joined()
            )
        })
    }
}

/// Editors that can be selected as the default IDE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeName {
    Cursor,
    Code,
    Windsurf,
}

impl IdeName {
    pub const ALL: [IdeName; 3] = [IdeName::Cursor, IdeName::Code, IdeName::Windsurf];

    pub fn as_str(self) -> &'static str {
        match self {
            IdeName::Cursor => "cursor",
            IdeName::Code => "code",
            IdeName::Windsurf => "windsurf",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ide| ide.as_str() == name)
    }

    pub fn joined() -> String {
        Self::ALL.map(IdeName::as_str).join(", ")
    }
}

impl fmt::Display for IdeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configuration that passed [`validate`].
///
/// Keys the schema does not know about are carried in `extra`, maps keep
/// document order, and an explicit `null` is kept as `Some(None)`, so the
/// document serializes back to what was loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub projects: Value,
    pub agents: IndexMap<AgentName, AgentConfig>,
    pub mcp: IndexMap<String, McpServerConfig>,
    pub ide: IdeConfig,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub context: Option<Option<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub enabled: bool,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub overrides: Option<Option<Map<String, Value>>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AgentConfig {
    pub fn overrides(&self) -> Option<&Map<String, Value>> {
        self.overrides.as_ref().and_then(Option::as_ref)
    }
}

/// Outer `None` means the key was absent, `Some(None)` an explicit `null`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeConfig {
    pub default: IdeName,
    #[serde(rename = "workspaceName")]
    pub workspace_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub const TRANSPORT_HTTP: &str = "http";
pub const TRANSPORT_STDIO: &str = "stdio";

/// An MCP server entry. `type: "http"` selects [`McpServerConfig::Http`];
/// anything else, including no `type` at all, is a stdio server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub enum McpServerConfig {
    Http(HttpServerConfig),
    Stdio(StdioServerConfig),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpServerConfig {
    pub url: String,
    pub agents: Option<Vec<AgentName>>,
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StdioServerConfig {
    pub command: String,
    pub args: Vec<Value>,
    pub agents: Option<Vec<AgentName>>,
    /// Holds a declared non-http `type` such as `"stdio"` alongside unknown keys.
    pub extra: Map<String, Value>,
}

impl McpServerConfig {
    pub fn transport(&self) -> &'static str {
        match self {
            McpServerConfig::Http(_) => TRANSPORT_HTTP,
            McpServerConfig::Stdio(_) => TRANSPORT_STDIO,
        }
    }

    pub fn agents(&self) -> Option<&[AgentName]> {
        match self {
            McpServerConfig::Http(http) => http.agents.as_deref(),
            McpServerConfig::Stdio(stdio) => stdio.agents.as_deref(),
        }
    }

    /// A server without an agent scope is available to every agent.
    pub fn allows(&self, agent: AgentName) -> bool {
        self.agents().map_or(true, |scope| scope.contains(&agent))
    }
}

impl TryFrom<Map<String, Value>> for McpServerConfig {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let agents = take_agent_scope(&mut fields)?;

        if fields.get("type").and_then(Value::as_str) == Some(TRANSPORT_HTTP) {
            fields.remove("type");
            let url = take_string(&mut fields, "url")?;
            return Ok(McpServerConfig::Http(HttpServerConfig {
                url,
                agents,
                extra: fields,
            }));
        }

        let command = take_string(&mut fields, "command")?;
        let args = match fields.remove("args") {
            Some(Value::Array(args)) => args,
            _ => return Err("stdio MCP server requires an \"args\" array".to_string()),
        };
        Ok(McpServerConfig::Stdio(StdioServerConfig {
            command,
            args,
            agents,
            extra: fields,
        }))
    }
}

impl From<McpServerConfig> for Map<String, Value> {
    fn from(server: McpServerConfig) -> Self {
        // Typed fields are written over `extra` so they always win.
        let (mut fields, agents) = match server {
            McpServerConfig::Http(http) => {
                let mut fields = http.extra;
                fields.insert("type".to_string(), Value::from(TRANSPORT_HTTP));
                fields.insert("url".to_string(), Value::String(http.url));
                (fields, http.agents)
            }
            McpServerConfig::Stdio(stdio) => {
                let mut fields = stdio.extra;
                if fields.get("type").and_then(Value::as_str) == Some(TRANSPORT_HTTP) {
                    fields.remove("type");
                }
                fields.insert("command".to_string(), Value::String(stdio.command));
                fields.insert("args".to_string(), Value::Array(stdio.args));
                (fields, stdio.agents)
            }
        };
        if let Some(agents) = agents {
            let scope = agents.into_iter().map(|a| Value::from(a.as_str())).collect();
            fields.insert("agents".to_string(), Value::Array(scope));
        }
        fields
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Result<String, String> {
    match fields.remove(key) {
        Some(Value::String(value)) => Ok(value),
        _ => Err(format!("MCP server requires a \"{key}\" string")),
    }
}

fn take_agent_scope(fields: &mut Map<String, Value>) -> Result<Option<Vec<AgentName>>, String> {
    match fields.remove("agents") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .and_then(AgentName::parse)
                    .ok_or_else(|| format!("invalid agent scope: {item}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(other) => {
            // Non-array scopes are not validated; keep them verbatim and treat the
            // server as unscoped.
            tracing::warn!(scope = %other, "ignoring MCP server agent scope that is not an array");
            fields.insert("agents".to_string(), other);
            Ok(None)
        }
        None => Ok(None),
    }
}

impl Configuration {
    pub fn context_path(&self) -> Option<&str> {
        self.context.as_ref().and_then(Option::as_deref)
    }

    pub fn enabled_agents(&self) -> impl Iterator<Item = AgentName> + '_ {
        self.agents
            .iter()
            .filter(|(_, agent)| agent.enabled)
            .map(|(name, _)| *name)
    }

    pub fn servers_for_agent(
        &self,
        agent: AgentName,
    ) -> impl Iterator<Item = (&String, &McpServerConfig)> + '_ {
        self.mcp.iter().filter(move |(_, server)| server.allows(agent))
    }
}
