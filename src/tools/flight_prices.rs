//! Flight prices tool implementation

use crate::error::Result;
use crate::tools::{parse_params, ToolExecutor, ToolResult, TOOL_GET_FLIGHT_PRICES};
use crate::travel::flights::{flight_quote, known_routes};
use async_trait::async_trait;
use serde::Deserialize;

/// Flight prices tool
///
/// Returns `origin`, `destination`, `price` (USD), `duration` and `airline`
/// for a route in either direction.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlightPricesTool;

#[derive(Debug, Deserialize)]
struct FlightParams {
    origin: String,
    destination: String,
}

#[async_trait]
impl ToolExecutor for FlightPricesTool {
    fn tool_definition(&self) -> serde_json::Value {
        let routes = known_routes()
            .into_iter()
            .map(|(a, b)| format!("{} <-> {}", a, b))
            .collect::<Vec<_>>()
            .join(", ");

        serde_json::json!({
            "name": TOOL_GET_FLIGHT_PRICES,
            "description": format!(
                "Returns mock flight prices between two cities: price in USD, flight duration and airline, or an error if the route does not exist. Routes work in both directions. Known routes: {}.",
                routes
            ),
            "parameters": {
                "type": "object",
                "properties": {
                    "origin": {
                        "type": "string",
                        "description": "Origin city"
                    },
                    "destination": {
                        "type": "string",
                        "description": "Destination city"
                    }
                },
                "required": ["origin", "destination"]
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult> {
        let params: FlightParams = parse_params(TOOL_GET_FLIGHT_PRICES, args)?;
        tracing::debug!(
            origin = %params.origin,
            destination = %params.destination,
            "Looking up flight prices"
        );

        ToolResult::from_lookup(
            flight_quote(&params.origin, &params.destination),
            std::convert::identity,
        )
    }
}
