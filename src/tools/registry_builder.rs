//! Configuration-aware tool registry builder
//!
//! Builds a [`ToolRegistry`] holding exactly the tools listed in
//! [`ToolsConfig::enabled`].

use std::sync::Arc;

use crate::config::ToolsConfig;
use crate::error::{Result, TravelError};
use crate::tools::{
    ConvertCurrencyTool, FlightPricesTool, ToolExecutor, ToolRegistry, TravelRecommendationsTool,
    WeatherReportTool, TOOL_CONVERT_CURRENCY, TOOL_GET_FLIGHT_PRICES,
    TOOL_GET_TRAVEL_RECOMMENDATIONS, TOOL_GET_WEATHER_REPORT,
};

/// Builder for tool registries
///
/// # Examples
///
/// ```
/// use travel_assistant::config::ToolsConfig;
/// use travel_assistant::tools::registry_builder::ToolRegistryBuilder;
///
/// let registry = ToolRegistryBuilder::new(ToolsConfig::default())
///     .build()
///     .expect("Failed to build registry");
/// assert_eq!(registry.len(), 4);
/// ```
pub struct ToolRegistryBuilder {
    tools_config: ToolsConfig,
}

impl ToolRegistryBuilder {
    /// Create a new tool registry builder
    pub fn new(tools_config: ToolsConfig) -> Self {
        Self { tools_config }
    }

    /// Build a registry with every enabled tool
    ///
    /// # Errors
    ///
    /// Returns `TravelError::Config` if an enabled name is not a known tool
    pub fn build(&self) -> Result<ToolRegistry> {
        let mut registry = ToolRegistry::new();

        for name in &self.tools_config.enabled {
            let executor = executor_for(name)
                .ok_or_else(|| TravelError::Config(format!("Invalid tool: {}", name)))?;
            registry.register(name.clone(), executor);
        }

        tracing::debug!(tools = ?registry.names(), "Built tool registry");
        Ok(registry)
    }
}

fn executor_for(name: &str) -> Option<Arc<dyn ToolExecutor>> {
    let executor: Arc<dyn ToolExecutor> = match name {
        TOOL_GET_WEATHER_REPORT => Arc::new(WeatherReportTool),
        TOOL_GET_FLIGHT_PRICES => Arc::new(FlightPricesTool),
        TOOL_GET_TRAVEL_RECOMMENDATIONS => Arc::new(TravelRecommendationsTool),
        TOOL_CONVERT_CURRENCY => Arc::new(ConvertCurrencyTool),
        _ => return None,
    };
    Some(executor)
}
