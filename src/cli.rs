//! Command-line interface definition for the travel assistant
//!
//! This module defines the CLI structure using clap's derive API. The CLI
//! lets a runtime (or a person) inspect the tool definitions and invoke a
//! single tool with JSON arguments.

use clap::{Parser, Subcommand};

/// Travel assistant tools for an externally hosted agent runtime
///
/// Exposes mock weather, flight, recommendation and currency lookups as
/// callable tools.
#[derive(Parser, Debug, Clone)]
#[command(name = "travel-assistant")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the agent name from config
    #[arg(long)]
    pub agent_name: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the enabled tool definitions as JSON
    Tools,

    /// Print the agent manifest (name, description, tools) as JSON
    Manifest,

    /// Execute one tool and print its result as JSON
    Call {
        /// Tool name (e.g. get_weather_report)
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            agent_name: None,
            command: Commands::Tools,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default() {
        let cli = Cli::default();
        assert_eq!(cli.config, Some("config/config.yaml".to_string()));
        assert!(!cli.verbose);
        assert!(cli.agent_name.is_none());
        assert!(matches!(cli.command, Commands::Tools));
    }

    #[test]
    fn test_cli_parse_call() {
        let cli = Cli::try_parse_from([
            "travel-assistant",
            "call",
            "get_weather_report",
            "--args",
            r#"{"city":"Paris"}"#,
        ])
        .unwrap();

        match cli.command {
            Commands::Call { tool, args } => {
                assert_eq!(tool, "get_weather_report");
                assert_eq!(args, r#"{"city":"Paris"}"#);
            }
            other => panic!("expected call command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_call_default_args() {
        let cli = Cli::try_parse_from(["travel-assistant", "call", "convert_currency"]).unwrap();
        assert!(matches!(cli.command, Commands::Call { ref args, .. } if args == "{}"));
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "travel-assistant",
            "--config",
            "custom.yaml",
            "-v",
            "--agent-name",
            "viajes",
            "manifest",
        ])
        .unwrap();
        assert_eq!(cli.agent_name.as_deref(), Some("viajes"));
        assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Manifest));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["travel-assistant"]).is_err());
    }
}
