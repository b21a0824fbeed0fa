//! Travel recommendations tool implementation

use crate::error::Result;
use crate::tools::{parse_params, ToolExecutor, ToolResult, TOOL_GET_TRAVEL_RECOMMENDATIONS};
use crate::travel::recommendations::{city_guide, known_cities};
use async_trait::async_trait;
use serde::Deserialize;

/// Travel recommendations tool
#[derive(Debug, Default, Clone, Copy)]
pub struct TravelRecommendationsTool;

#[derive(Debug, Deserialize)]
struct RecommendationParams {
    city: String,
}

#[async_trait]
impl ToolExecutor for TravelRecommendationsTool {
    fn tool_definition(&self) -> serde_json::Value {
        serde_json::json!({
            "name": TOOL_GET_TRAVEL_RECOMMENDATIONS,
            "description": format!(
                "Returns the main attractions and local advice for a city: must-see places, a local tip, the best season to visit and a daily budget in USD. Known cities: {}.",
                known_cities().join(", ")
            ),
            "parameters": {
                "type": "object",
                "properties": {
                    "city": {
                        "type": "string",
                        "description": "City to get recommendations for"
                    }
                },
                "required": ["city"]
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult> {
        let params: RecommendationParams = parse_params(TOOL_GET_TRAVEL_RECOMMENDATIONS, args)?;
        tracing::debug!(city = %params.city, "Looking up recommendations");

        ToolResult::from_lookup(city_guide(&params.city), std::convert::identity)
    }
}
