//! Schema validation for a decoded meld configuration document.
//!
//! [`validate`] never panics and never returns `Err`: every violation becomes a
//! message in [`ValidationResult::Invalid`]. Only a non-object root and missing
//! top-level keys stop validation early; everything else accumulates.

use super::{AgentName, Configuration, IdeName, TRANSPORT_HTTP};
use crate::utils::{MeldError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

pub const REQUIRED_KEYS: [&str; 4] = ["projects", "agents", "mcp", "ide"];

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid(Configuration),
    Invalid(Vec<String>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn config(&self) -> Option<&Configuration> {
        match self {
            ValidationResult::Valid(config) => Some(config),
            ValidationResult::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            ValidationResult::Valid(_) => &[],
            ValidationResult::Invalid(errors) => errors,
        }
    }

    pub fn into_result(self) -> Result<Configuration> {
        match self {
            ValidationResult::Valid(config) => Ok(config),
            ValidationResult::Invalid(errors) => Err(MeldError::validation(errors)),
        }
    }
}

pub fn validate(input: &Value) -> ValidationResult {
    let Some(root) = input.as_object() else {
        return ValidationResult::Invalid(vec!["Config must be an object".to_string()]);
    };

    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| !root.contains_key(**key))
        .map(|key| format!("Missing required key: {key}"))
        .collect();
    if !missing.is_empty() {
        tracing::debug!(missing = missing.len(), "config is missing top-level keys");
        return ValidationResult::Invalid(missing);
    }

    let mut errors = Vec::new();
    if let Some(agents) = section(root, "agents", &mut errors) {
        validate_agents(agents, &mut errors);
    }
    if let Some(ide) = section(root, "ide", &mut errors) {
        validate_ide(ide, &mut errors);
    }
    if let Some(servers) = section(root, "mcp", &mut errors) {
        validate_mcp_servers(servers, &mut errors);
    }
    validate_context(root, &mut errors);

    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "config failed validation");
        return ValidationResult::Invalid(errors);
    }

    match Configuration::deserialize(input) {
        Ok(config) => ValidationResult::Valid(config),
        Err(e) => ValidationResult::Invalid(vec![format!(
            "Config could not be read after validation: {e}"
        )]),
    }
}

/// A section that is not a mapping gets one message and its checks are skipped.
fn section<'a>(
    root: &'a Map<String, Value>,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<&'a Map<String, Value>> {
    match root.get(key)? {
        Value::Object(map) => Some(map),
        _ => {
            errors.push(format!("{key} must be an object"));
            None
        }
    }
}

fn validate_agents(agents: &Map<String, Value>, errors: &mut Vec<String>) {
    for expected in AgentName::ALL {
        if !agents.contains_key(expected.as_str()) {
            errors.push(format!("Missing required agent: {expected}"));
        }
    }

    for (name, agent) in agents {
        if AgentName::parse(name).is_none() {
            errors.push(format!(
                "Invalid agent name: {}. Must be one of: {}",
                name,
                AgentName::joined()
            ));
            continue;
        }

        if !agent.get("enabled").is_some_and(Value::is_boolean) {
            errors.push(format!("Agent \"{name}\" must have an \"enabled\" boolean"));
        }
        match agent.get("overrides") {
            None | Some(Value::Null) | Some(Value::Object(_)) => {}
            Some(_) => errors.push(format!("Agent \"{name}\" overrides must be an object")),
        }
    }
}

fn validate_ide(ide: &Map<String, Value>, errors: &mut Vec<String>) {
    let default = ide
        .get("default")
        .and_then(Value::as_str)
        .and_then(IdeName::parse);
    if default.is_none() {
        errors.push(format!("ide.default must be one of: {}", IdeName::joined()));
    }

    if !is_non_empty_string(ide.get("workspaceName")) {
        errors.push("ide.workspaceName must be a non-empty string".to_string());
    }
}

fn validate_mcp_servers(servers: &Map<String, Value>, errors: &mut Vec<String>) {
    for (server_name, server) in servers {
        if server.get("type").and_then(Value::as_str) == Some(TRANSPORT_HTTP) {
            if !is_non_empty_string(server.get("url")) {
                errors.push(format!(
                    "MCP server \"{server_name}\" (http) must have a \"url\" string"
                ));
            }
        } else {
            if !is_non_empty_string(server.get("command")) {
                errors.push(format!(
                    "MCP server \"{server_name}\" (stdio) must have a \"command\" string"
                ));
            }
            if !server.get("args").is_some_and(Value::is_array) {
                errors.push(format!(
                    "MCP server \"{server_name}\" (stdio) must have an \"args\" array"
                ));
            }
        }

        // A scope that is not an array is skipped without a message.
        if let Some(Value::Array(scope)) = server.get("agents") {
            for agent in scope {
                if agent.as_str().and_then(AgentName::parse).is_none() {
                    errors.push(format!(
                        "MCP server \"{}\" has invalid agent scope: {}",
                        server_name,
                        display_value(agent)
                    ));
                }
            }
        }
    }
}

fn validate_context(root: &Map<String, Value>, errors: &mut Vec<String>) {
    match root.get("context") {
        None | Some(Value::Null) | Some(Value::String(_)) => {}
        Some(_) => errors.push("context must be a string path".to_string()),
    }
}

fn is_non_empty_string(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}

/// Strings print bare; anything else prints as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
