//! Travel assistant - mock travel lookups exposed as agent tools
//!
//! This library provides four pure lookups (weather, flight prices, city
//! recommendations, currency conversion) over fixed in-memory tables, and a
//! tool layer that exposes them to an externally hosted agent runtime.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `travel`: The lookups and their read-only tables
//! - `tools`: Tool definitions, executors, and the tool registry
//! - `agent`: Agent manifest handed to the runtime
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli` / `commands`: Command-line interface and handlers
//!
//! # Example
//!
//! ```no_run
//! use travel_assistant::config::Config;
//! use travel_assistant::tools::registry_builder::ToolRegistryBuilder;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let registry = ToolRegistryBuilder::new(config.tools.clone()).build()?;
//!     let result = registry
//!         .dispatch("get_weather_report", serde_json::json!({"city": "Tokyo"}))
//!         .await?;
//!     println!("{}", result.to_json());
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod tools;
pub mod travel;

// Re-export commonly used types
pub use agent::AgentManifest;
pub use config::Config;
pub use error::{LookupError, Result, TravelError};
pub use tools::{ToolExecutor, ToolRegistry, ToolResult, ToolStatus};
