use crate::cli::parser::ShowArgs;
use crate::config::{AgentName, ConfigManager, Configuration};
use crate::utils::Result;
use serde_json::{Map, Value};

pub fn execute(args: ShowArgs) -> Result<()> {
    let path = ConfigManager::resolve_path(args.path.as_deref());
    let config = ConfigManager::load_from_file(&path)?;

    let output = render(&config, args.agent)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// The whole config, or only the servers an agent may use.
pub fn render(config: &Configuration, agent: Option<AgentName>) -> Result<Value> {
    let Some(agent) = agent else {
        return Ok(serde_json::to_value(config)?);
    };

    let mut servers = Map::new();
    for (name, server) in config.servers_for_agent(agent) {
        servers.insert(name.clone(), serde_json::to_value(server)?);
    }
    Ok(Value::Object(servers))
}
