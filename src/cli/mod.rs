pub mod commands;
pub mod parser;

#[cfg(test)]
mod tests;

pub use parser::{Cli, Commands};

use crate::utils::Result;

pub fn execute_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Show(args) => commands::show::execute(args),
        Commands::Init(args) => commands::init::execute(args),
    }
}
