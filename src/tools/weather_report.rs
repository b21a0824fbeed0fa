//! Weather report tool implementation
//!
//! Wraps [`weather_report`](crate::travel::weather::weather_report) and
//! returns the single-line report under `report`.

use crate::error::Result;
use crate::tools::{parse_params, ToolExecutor, ToolResult, TOOL_GET_WEATHER_REPORT};
use crate::travel::weather::{known_cities, weather_report};
use async_trait::async_trait;
use serde::Deserialize;

/// Weather report tool
///
/// # Examples
///
/// ```
/// use travel_assistant::tools::{ToolExecutor, WeatherReportTool};
///
/// # tokio_test::block_on(async {
/// let result = WeatherReportTool
///     .execute(serde_json::json!({"city": "London"}))
///     .await
///     .unwrap();
///
/// assert!(result.is_success());
/// # });
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct WeatherReportTool;

#[derive(Debug, Deserialize)]
struct WeatherParams {
    city: String,
}

#[async_trait]
impl ToolExecutor for WeatherReportTool {
    fn tool_definition(&self) -> serde_json::Value {
        serde_json::json!({
            "name": TOOL_GET_WEATHER_REPORT,
            "description": format!(
                "Gets the current weather for a city. Returns 'status' ('success' or 'error') and a 'report' line, or 'error_message' if the city is not available. Known cities: {}.",
                known_cities().join(", ")
            ),
            "parameters": {
                "type": "object",
                "properties": {
                    "city": {
                        "type": "string",
                        "description": "Name of the city to look up"
                    }
                },
                "required": ["city"]
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult> {
        let params: WeatherParams = parse_params(TOOL_GET_WEATHER_REPORT, args)?;
        tracing::debug!(city = %params.city, "Looking up weather");

        ToolResult::from_lookup(weather_report(&params.city), |report| {
            serde_json::json!({ "report": report.summary() })
        })
    }
}
