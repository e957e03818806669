#[cfg(test)]
mod cli_tests {
    use crate::cli::parser::*;
    use crate::config::AgentName;
    use crate::utils::logging::LogLevel;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_validate_command_parsing() {
        let cli = Cli::try_parse_from(["meld", "validate"]).unwrap();
        match cli.command {
            Commands::Validate(args) => assert!(args.path.is_none()),
            _ => panic!("Expected Validate command"),
        }
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_validate_command_with_path() {
        let cli = Cli::try_parse_from(["meld", "validate", "conf/meld.json"]).unwrap();
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.path, Some(PathBuf::from("conf/meld.json")));
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_show_command_with_agent() {
        let cli = Cli::try_parse_from(["meld", "show", "--agent", "codex-cli"]).unwrap();
        match cli.command {
            Commands::Show(args) => {
                assert!(args.path.is_none());
                assert_eq!(args.agent, Some(AgentName::CodexCli));
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_show_command_rejects_unknown_agent() {
        let result = Cli::try_parse_from(["meld", "show", "--agent", "copilot"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_init_command_with_force() {
        let cli = Cli::try_parse_from(["meld", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Init(args) => {
                assert!(args.force);
                assert!(args.path.is_none());
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_global_log_level() {
        let cli = Cli::try_parse_from(["meld", "validate", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["meld"]).is_err());
    }
}
