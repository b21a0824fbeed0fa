//! Configuration management for the travel assistant
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{Result, TravelError};
use crate::tools::ALL_TOOLS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Agent identity handed to the hosting runtime
    #[serde(default)]
    pub agent: AgentConfig,
    /// Tool exposure settings
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Agent identity configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Name the runtime registers the agent under
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// One-line description of what the agent does
    #[serde(default = "default_agent_description")]
    pub description: String,
}

fn default_agent_name() -> String {
    "travel_assistant".to_string()
}

fn default_agent_description() -> String {
    "Asistente de viajes inteligente que ayuda a planear trips con clima, vuelos, recomendaciones y conversión de divisas.".to_string()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            description: default_agent_description(),
        }
    }
}

/// Smallest accepted `max_output_size` (bytes)
///
/// Every tool result fits in this many bytes, so rendered messages are never
/// truncated and always stay valid JSON.
pub const MIN_OUTPUT_SIZE: usize = 1_024;

/// Tool exposure configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Names of the tools to expose, in order
    #[serde(default = "default_enabled_tools")]
    pub enabled: Vec<String>,

    /// Maximum size of a rendered tool message (bytes)
    #[serde(default = "default_max_output")]
    pub max_output_size: usize,
}

fn default_enabled_tools() -> Vec<String> {
    ALL_TOOLS.iter().map(|name| name.to_string()).collect()
}

fn default_max_output() -> usize {
    8_192
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled_tools(),
            max_output_size: default_max_output(),
        }
    }
}

impl Config {
    /// Load configuration from a file, then apply environment and CLI
    /// overrides
    ///
    /// A missing file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default_config()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn default_config() -> Self {
        Self {
            agent: AgentConfig::default(),
            tools: ToolsConfig::default(),
        }
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(TravelError::from)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(TravelError::from)?;
        tracing::debug!("Loaded configuration from {}", path);
        Ok(config)
    }

    fn apply_env_vars(&mut self) {
        if let Ok(name) = std::env::var("TRAVEL_ASSISTANT_AGENT_NAME") {
            self.agent.name = name;
        }

        if let Ok(enabled) = std::env::var("TRAVEL_ASSISTANT_ENABLED_TOOLS") {
            self.tools.enabled = enabled
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Ok(max_output) = std::env::var("TRAVEL_ASSISTANT_MAX_OUTPUT_SIZE") {
            if let Ok(value) = max_output.parse() {
                self.tools.max_output_size = value;
            } else {
                tracing::warn!("Invalid TRAVEL_ASSISTANT_MAX_OUTPUT_SIZE: {}", max_output);
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(name) = &cli.agent_name {
            tracing::debug!("Using agent name override from CLI: {}", name);
            self.agent.name = name.clone();
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `TravelError::Config` if the agent name is empty, no tool is
    /// enabled, a tool name is unknown or repeated, or `max_output_size` is
    /// below [`MIN_OUTPUT_SIZE`]
    pub fn validate(&self) -> Result<()> {
        if self.agent.name.trim().is_empty() {
            return Err(TravelError::Config("agent.name cannot be empty".to_string()).into());
        }

        if self.tools.enabled.is_empty() {
            return Err(TravelError::Config(
                "tools.enabled must list at least one tool".to_string(),
            )
            .into());
        }

        let mut seen = HashSet::new();
        for name in &self.tools.enabled {
            if !ALL_TOOLS.contains(&name.as_str()) {
                return Err(TravelError::Config(format!(
                    "Invalid tool: {}. Must be one of: {}",
                    name,
                    ALL_TOOLS.join(", ")
                ))
                .into());
            }
            if !seen.insert(name.as_str()) {
                return Err(
                    TravelError::Config(format!("Tool listed more than once: {}", name)).into(),
                );
            }
        }

        if self.tools.max_output_size < MIN_OUTPUT_SIZE {
            return Err(TravelError::Config(format!(
                "tools.max_output_size must be at least {}",
                MIN_OUTPUT_SIZE
            ))
            .into());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
