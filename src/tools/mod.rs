//! Tools module for the travel assistant
//!
//! This module exposes the travel lookups to an agent runtime as callable
//! tools. Each tool publishes a definition in the OpenAI function calling
//! format and executes against JSON arguments, returning a [`ToolResult`]
//! whose wire shape is `{"status": "success", ...fields}` or
//! `{"status": "error", "error_message": "..."}`.

pub mod convert_currency;
pub mod flight_prices;
pub mod registry_builder;
pub mod travel_recommendations;
pub mod weather_report;

pub use convert_currency::ConvertCurrencyTool;
pub use flight_prices::FlightPricesTool;
pub use travel_recommendations::TravelRecommendationsTool;
pub use weather_report::WeatherReportTool;

use crate::error::{LookupError, Result, TravelError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Tool name for the weather lookup
pub const TOOL_GET_WEATHER_REPORT: &str = "get_weather_report";
/// Tool name for the flight fare lookup
pub const TOOL_GET_FLIGHT_PRICES: &str = "get_flight_prices";
/// Tool name for the city guide lookup
pub const TOOL_GET_TRAVEL_RECOMMENDATIONS: &str = "get_travel_recommendations";
/// Tool name for currency conversion
pub const TOOL_CONVERT_CURRENCY: &str = "convert_currency";

/// Every tool this crate provides, in registration order
pub const ALL_TOOLS: [&str; 4] = [
    TOOL_GET_WEATHER_REPORT,
    TOOL_GET_FLIGHT_PRICES,
    TOOL_GET_TRAVEL_RECOMMENDATIONS,
    TOOL_CONVERT_CURRENCY,
];

/// Tool definition structure
///
/// Typed view of what [`ToolExecutor::tool_definition`] returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Name of the tool
    pub name: String,
    /// Description of what the tool does
    pub description: String,
    /// JSON schema for the tool's parameters
    pub parameters: Value,
}

impl Tool {
    /// Parse a JSON tool definition
    ///
    /// # Errors
    ///
    /// Returns `TravelError::Serialization` if the definition is missing
    /// `name`, `description` or `parameters`
    pub fn from_definition(definition: Value) -> Result<Self> {
        Ok(serde_json::from_value(definition).map_err(TravelError::from)?)
    }
}

/// Outcome status carried by every tool result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    /// The lookup matched
    Success,
    /// The lookup missed; `error_message` explains which input
    Error,
}

/// Tool result structure
///
/// On success `fields` holds the lookup-specific payload and
/// `error_message` is `None`. On error `fields` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResult {
    /// Whether the lookup succeeded
    pub status: ToolStatus,
    /// Lookup-specific payload, flattened next to `status`
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    /// Message naming the unmatched input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ToolResult {
    /// Create a successful tool result
    ///
    /// # Arguments
    ///
    /// * `fields` - Payload fields to flatten next to `status`
    pub fn success(fields: Map<String, Value>) -> Self {
        Self {
            status: ToolStatus::Success,
            fields,
            error_message: None,
        }
    }

    /// Create a failed tool result
    ///
    /// # Arguments
    ///
    /// * `message` - Error message for the end user
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ToolStatus::Error,
            fields: Map::new(),
            error_message: Some(message.into()),
        }
    }

    /// Create a successful result from any record that serializes to a
    /// JSON object
    ///
    /// # Errors
    ///
    /// Returns `TravelError::Tool` if `record` does not serialize to an object
    pub fn from_record<T: Serialize>(record: &T) -> Result<Self> {
        match serde_json::to_value(record).map_err(TravelError::from)? {
            Value::Object(fields) => Ok(Self::success(fields)),
            other => Err(TravelError::Tool(format!(
                "Tool payload must be a JSON object, got: {}",
                other
            ))
            .into()),
        }
    }

    /// Turn a lookup outcome into a result, mapping the success value with
    /// `render`
    ///
    /// Lookup misses become error results. Only a failure to serialize the
    /// rendered payload is returned as `Err`.
    pub fn from_lookup<T, P, F>(
        outcome: std::result::Result<T, LookupError>,
        render: F,
    ) -> Result<Self>
    where
        P: Serialize,
        F: FnOnce(T) -> P,
    {
        match outcome {
            Ok(found) => Self::from_record(&render(found)),
            Err(miss) => {
                tracing::debug!(error = %miss, "Lookup miss");
                Ok(Self::error(miss.to_string()))
            }
        }
    }

    /// Add a payload field to the result
    ///
    /// # Returns
    ///
    /// Returns self for chaining
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns true if the lookup matched
    pub fn is_success(&self) -> bool {
        self.status == ToolStatus::Success
    }

    /// Look up a payload field by name
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Convert to the JSON value handed back to the runtime
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            serde_json::json!({
                "status": "error",
                "error_message": format!("Failed to serialize tool result: {}", e),
            })
        })
    }

    /// Convert to a message string for the conversation
    ///
    /// The compact JSON is cut to at most `max_size` bytes (on a character
    /// boundary) and marked as truncated when it does not fit.
    pub fn to_message(&self, max_size: usize) -> String {
        let mut message = self.to_json().to_string();
        if message.len() > max_size {
            let mut cut = max_size;
            while !message.is_char_boundary(cut) {
                cut -= 1;
            }
            message.truncate(cut);
            message.push_str("\n... (truncated)");
        }
        message
    }
}

/// Tool executor trait for implementing tool execution logic
///
/// Each travel tool implements this trait so a runtime can discover it
/// through its definition and call it with JSON arguments.
///
/// # Examples
///
/// ```no_run
/// use travel_assistant::tools::{ToolExecutor, ToolResult};
/// use travel_assistant::error::Result;
/// use async_trait::async_trait;
/// use serde_json::Value;
///
/// struct EchoTool;
///
/// #[async_trait]
/// impl ToolExecutor for EchoTool {
///     fn tool_definition(&self) -> Value {
///         serde_json::json!({
///             "name": "echo",
///             "description": "Echoes its arguments",
///             "parameters": {"type": "object", "properties": {}}
///         })
///     }
///
///     async fn execute(&self, args: Value) -> Result<ToolResult> {
///         Ok(ToolResult::success(serde_json::Map::new()).with_field("args", args))
///     }
/// }
/// ```
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Returns the tool definition as a JSON value
    ///
    /// The definition follows the OpenAI function calling format:
    /// ```json
    /// {
    ///   "name": "tool_name",
    ///   "description": "Tool description",
    ///   "parameters": {
    ///     "type": "object",
    ///     "properties": {
    ///       "param1": {"type": "string", "description": "..."}
    ///     },
    ///     "required": ["param1"]
    ///   }
    /// }
    /// ```
    fn tool_definition(&self) -> Value;

    /// Executes the tool with the given arguments
    ///
    /// # Errors
    ///
    /// Returns error only if `args` do not match the parameter schema.
    /// A lookup miss is an `Ok` error result.
    async fn execute(&self, args: Value) -> Result<ToolResult>;
}

/// Deserialize tool arguments, reporting schema mismatches as tool errors
pub(crate) fn parse_params<T: DeserializeOwned>(tool: &str, args: Value) -> Result<T> {
    serde_json::from_value(args)
        .map_err(|e| TravelError::Tool(format!("Invalid parameters for {}: {}", tool, e)).into())
}

/// Tool registry for managing available tools
///
/// Tools are kept ordered by name so listings are stable.
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn ToolExecutor>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Register a tool executor in the registry
    ///
    /// Registering an existing name replaces the previous executor.
    pub fn register(&mut self, name: impl Into<String>, executor: Arc<dyn ToolExecutor>) {
        self.tools.insert(name.into(), executor);
    }

    /// Get a tool executor by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolExecutor>> {
        self.tools.get(name).cloned()
    }

    /// Execute a registered tool by name
    ///
    /// # Errors
    ///
    /// Returns `TravelError::UnknownTool` if no tool has that name, or the
    /// executor's own error for malformed arguments
    pub async fn dispatch(&self, name: &str, args: Value) -> Result<ToolResult> {
        let executor = self
            .get(name)
            .ok_or_else(|| TravelError::UnknownTool(name.to_string()))?;
        tracing::debug!(tool = name, %args, "Dispatching tool call");
        executor.execute(args).await
    }

    /// Get all tool definitions as JSON values, ordered by name
    pub fn all_definitions(&self) -> Vec<Value> {
        self.tools
            .values()
            .map(|executor| executor.tool_definition())
            .collect()
    }

    /// Registered tool names, ordered
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_from_definition() {
        let tool = Tool::from_definition(json!({
            "name": "test_tool",
            "description": "A test tool",
            "parameters": {"type": "object", "properties": {}}
        }))
        .unwrap();
        assert_eq!(tool.name, "test_tool");
        assert_eq!(tool.description, "A test tool");
    }

    #[test]
    fn test_tool_from_incomplete_definition() {
        assert!(Tool::from_definition(json!({"name": "x"})).is_err());
    }

    #[test]
    fn test_tool_result_success_serialization() {
        let result = ToolResult::success(Map::new()).with_field("report", "ok");
        assert!(result.is_success());
        assert_eq!(
            result.to_json(),
            json!({"status": "success", "report": "ok"})
        );
    }

    #[test]
    fn test_tool_result_error_has_only_message() {
        let result = ToolResult::error("not found");
        assert!(!result.is_success());
        assert_eq!(
            result.to_json(),
            json!({"status": "error", "error_message": "not found"})
        );
    }

    #[test]
    fn test_tool_result_from_record_rejects_non_object() {
        assert!(ToolResult::from_record(&42).is_err());
    }

    #[test]
    fn test_tool_result_from_lookup_miss() {
        let miss: std::result::Result<u32, LookupError> = Err(LookupError::Weather {
            city: "Nowhere".to_string(),
        });
        let result = ToolResult::from_lookup(miss, |n| json!({ "n": n })).unwrap();
        assert_eq!(result.status, ToolStatus::Error);
        assert!(result.error_message.unwrap().contains("Nowhere"));
    }

    #[test]
    fn test_tool_result_to_message_fits() {
        let result = ToolResult::error("short");
        let message = result.to_message(1024);
        assert!(!message.contains("truncated"));
        let parsed: Value = serde_json::from_str(&message).unwrap();
        assert_eq!(parsed["status"], "error");
    }

    #[test]
    fn test_tool_result_to_message_truncates_on_char_boundary() {
        let result = ToolResult::success(Map::new()).with_field("text", "é".repeat(100));
        let message = result.to_message(30);
        assert!(message.ends_with("... (truncated)"));
        assert!(message.len() <= 30 + "\n... (truncated)".len());
    }

    struct MockToolExecutor {
        name: String,
    }

    #[async_trait]
    impl ToolExecutor for MockToolExecutor {
        fn tool_definition(&self) -> Value {
            json!({
                "name": self.name,
                "description": "Mock tool",
                "parameters": {"type": "object"}
            })
        }

        async fn execute(&self, _args: Value) -> Result<ToolResult> {
            Ok(ToolResult::success(Map::new()).with_field("tool", self.name.clone()))
        }
    }

    fn mock(name: &str) -> Arc<dyn ToolExecutor> {
        Arc::new(MockToolExecutor {
            name: name.to_string(),
        })
    }

    #[test]
    fn test_tool_registry_new() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.len(), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_tool_registry_register_and_get() {
        let mut registry = ToolRegistry::new();
        registry.register("test", mock("test"));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("test").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_tool_registry_definitions_are_ordered() {
        let mut registry = ToolRegistry::new();
        registry.register("zeta", mock("zeta"));
        registry.register("alpha", mock("alpha"));

        assert_eq!(registry.names(), vec!["alpha", "zeta"]);
        let all = registry.all_definitions();
        assert_eq!(all[0]["name"], "alpha");
        assert_eq!(all[1]["name"], "zeta");
    }

    #[tokio::test]
    async fn test_tool_registry_dispatch() {
        let mut registry = ToolRegistry::new();
        registry.register("test", mock("test"));

        let result = registry.dispatch("test", json!({})).await.unwrap();
        assert_eq!(result.field("tool"), Some(&json!("test")));
    }

    #[tokio::test]
    async fn test_tool_registry_dispatch_unknown() {
        let registry = ToolRegistry::default();
        let err = registry.dispatch("missing", json!({})).await.unwrap_err();
        assert!(err.to_string().contains("Unknown tool: missing"));
    }
}
