/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes three top-level command modules:

- `tools`: List the enabled tool definitions
- `manifest`: Describe the agent for a hosting runtime
- `call`: Execute one tool with JSON arguments

Each handler returns the text to print so the entrypoint owns stdout.
*/

use crate::agent::AgentManifest;
use crate::config::Config;
use crate::error::{Result, TravelError};
use crate::tools::registry_builder::ToolRegistryBuilder;

// Tool listing handler
pub mod tools {
    //! Prints every enabled tool definition as a JSON array.

    use super::*;

    /// Render the enabled tool definitions
    ///
    /// # Errors
    ///
    /// Returns error if the registry cannot be built from `config`
    pub fn list_tools(config: &Config) -> Result<String> {
        let registry = ToolRegistryBuilder::new(config.tools.clone()).build()?;
        let definitions = registry.all_definitions();
        tracing::info!("Listing {} tools", definitions.len());
        Ok(serde_json::to_string_pretty(&definitions).map_err(TravelError::from)?)
    }
}

// Agent manifest handler
pub mod manifest {
    //! Prints the agent manifest consumed by the hosting runtime.

    use super::*;

    /// Render the agent manifest
    ///
    /// # Errors
    ///
    /// Returns error if the registry cannot be built from `config`
    pub fn show_manifest(config: &Config) -> Result<String> {
        let registry = ToolRegistryBuilder::new(config.tools.clone()).build()?;
        let manifest = AgentManifest::new(&config.agent, &registry)?;
        tracing::info!(
            agent = %manifest.name,
            tools = manifest.tools.len(),
            "Rendering agent manifest"
        );
        Ok(serde_json::to_string_pretty(&manifest).map_err(TravelError::from)?)
    }
}

// Single tool invocation handler
pub mod call {
    //! Executes one tool and prints the result the runtime would receive.
    //!
    //! A lookup miss is still printed as a normal result with
    //! `"status": "error"`. Only unknown tools and malformed arguments fail
    //! the command.

    use super::*;

    /// Execute `tool` with `args` (a JSON object as text)
    ///
    /// # Errors
    ///
    /// Returns `TravelError::Tool` if `args` is not valid JSON,
    /// `TravelError::UnknownTool` if the tool is not enabled, or the tool's
    /// own parameter error
    pub async fn call_tool(config: &Config, tool: &str, args: &str) -> Result<String> {
        let args: serde_json::Value = serde_json::from_str(args)
            .map_err(|e| TravelError::Tool(format!("Invalid JSON arguments: {}", e)))?;

        let registry = ToolRegistryBuilder::new(config.tools.clone()).build()?;
        let result = registry.dispatch(tool, args).await?;

        if result.is_success() {
            tracing::info!(tool, "Tool call succeeded");
        } else {
            tracing::info!(tool, error = ?result.error_message, "Tool call returned an error");
        }

        Ok(result.to_message(config.tools.max_output_size))
    }
}
