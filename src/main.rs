use clap::Parser;
use meld::cli::{execute_command, Cli};
use meld::utils::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level) {
        eprintln!("meld: {:#}", e);
        std::process::exit(1);
    }

    if let Err(e) = execute_command(cli) {
        eprintln!("meld: {}", e);
        std::process::exit(1);
    }
}
