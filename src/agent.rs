//! Agent manifest handed to the hosting runtime
//!
//! The runtime owns the conversation loop and the model. This crate only
//! tells it who the agent is and which tools it may call.

use serde::{Deserialize, Serialize};

use crate::config::AgentConfig;
use crate::error::Result;
use crate::tools::{Tool, ToolRegistry};

/// Identity plus tool definitions for one agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentManifest {
    /// Name the runtime registers the agent under
    pub name: String,
    /// One-line description of the agent
    pub description: String,
    /// Definitions of every tool the agent may call, ordered by name
    pub tools: Vec<Tool>,
}

impl AgentManifest {
    /// Build a manifest from agent settings and a tool registry
    ///
    /// # Errors
    ///
    /// Returns error if a registered tool publishes a malformed definition
    pub fn new(agent: &AgentConfig, registry: &ToolRegistry) -> Result<Self> {
        let tools = registry
            .all_definitions()
            .into_iter()
            .map(Tool::from_definition)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: agent.name.clone(),
            description: agent.description.clone(),
            tools,
        })
    }

    /// Names of the tools in the manifest
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name.as_str()).collect()
    }
}
