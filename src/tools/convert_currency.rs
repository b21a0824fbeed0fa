//! Currency conversion tool implementation
//!
//! Returns display strings only: `original`, `converted` (two decimals) and
//! `exchange_rate` (four decimals).

use crate::error::Result;
use crate::tools::{parse_params, ToolExecutor, ToolResult, TOOL_CONVERT_CURRENCY};
use crate::travel::currency::{convert, supported_currencies};
use async_trait::async_trait;
use serde::Deserialize;

/// Currency conversion tool
#[derive(Debug, Default, Clone, Copy)]
pub struct ConvertCurrencyTool;

#[derive(Debug, Deserialize)]
struct ConvertParams {
    amount: f64,
    from_currency: String,
    to_currency: String,
}

#[async_trait]
impl ToolExecutor for ConvertCurrencyTool {
    fn tool_definition(&self) -> serde_json::Value {
        let codes = supported_currencies();
        serde_json::json!({
            "name": TOOL_CONVERT_CURRENCY,
            "description": format!(
                "Converts an amount between currencies using mock exchange rates. Returns the conversion with the applied exchange rate, or an error if a currency is not supported. Supported currencies: {}.",
                codes.join(", ")
            ),
            "parameters": {
                "type": "object",
                "properties": {
                    "amount": {
                        "type": "number",
                        "description": "Amount to convert"
                    },
                    "from_currency": {
                        "type": "string",
                        "description": "Source currency code (e.g. 'USD', 'MXN')"
                    },
                    "to_currency": {
                        "type": "string",
                        "description": "Target currency code (e.g. 'EUR', 'JPY')"
                    }
                },
                "required": ["amount", "from_currency", "to_currency"]
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult> {
        let params: ConvertParams = parse_params(TOOL_CONVERT_CURRENCY, args)?;
        tracing::debug!(
            amount = params.amount,
            from = %params.from_currency,
            to = %params.to_currency,
            "Converting currency"
        );

        ToolResult::from_lookup(
            convert(params.amount, &params.from_currency, &params.to_currency),
            |conversion| {
                serde_json::json!({
                    "original": conversion.original_display(),
                    "converted": conversion.converted_display(),
                    "exchange_rate": conversion.rate_display(),
                })
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_execute_identity() {
        let result = ConvertCurrencyTool
            .execute(json!({"amount": 100, "from_currency": "USD", "to_currency": "USD"}))
            .await
            .unwrap();

        assert_eq!(
            result.to_json(),
            json!({
                "status": "success",
                "original": "100 USD",
                "converted": "100.00 USD",
                "exchange_rate": "1.0000"
            })
        );
    }

    #[tokio::test]
    async fn test_execute_usd_to_mxn_lowercase_codes() {
        let result = ConvertCurrencyTool
            .execute(json!({"amount": 100.0, "from_currency": "usd", "to_currency": "mxn"}))
            .await
            .unwrap();

        assert_eq!(result.field("converted"), Some(&json!("1720.00 MXN")));
        assert_eq!(result.field("exchange_rate"), Some(&json!("17.2000")));
    }

    #[tokio::test]
    async fn test_execute_unsupported_currency() {
        let result = ConvertCurrencyTool
            .execute(json!({"amount": 5, "from_currency": "btc", "to_currency": "eur"}))
            .await
            .unwrap();

        assert_eq!(
            result.to_json(),
            json!({
                "status": "error",
                "error_message": "Moneda no soportada: BTC o EUR"
            })
        );
    }

    #[tokio::test]
    async fn test_execute_amount_as_string_is_rejected() {
        let result = ConvertCurrencyTool
            .execute(json!({"amount": "100", "from_currency": "USD", "to_currency": "EUR"}))
            .await;
        assert!(result.is_err());
    }
}
