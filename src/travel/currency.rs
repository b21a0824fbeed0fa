//! Currency conversion through a fixed USD base
//!
//! Every rate is "units per USD". A conversion goes `from -> USD -> to`, and
//! the pairwise rate is `rate[to] / rate[from]`. Values are kept unrounded;
//! only the display helpers round.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::LookupError;
use crate::travel::normalize::currency_key;

/// The base currency all rates are expressed against
pub const BASE_CURRENCY: &str = "USD";

static RATES: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        (BASE_CURRENCY, 1.0),
        ("MXN", 17.2),
        ("EUR", 0.92),
        ("GBP", 0.79),
        ("JPY", 149.5),
    ])
});

/// A completed conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    /// Amount as supplied by the caller
    pub amount: f64,
    /// Normalized source code
    pub from: String,
    /// Normalized target code
    pub to: String,
    /// Unrounded converted amount
    pub converted: f64,
    /// Unrounded units of `to` per unit of `from`
    pub rate: f64,
}

impl Conversion {
    /// Original amount with its code, e.g. `"100 USD"`
    pub fn original_display(&self) -> String {
        format!("{} {}", self.amount, self.from)
    }

    /// Converted amount to two decimals with its code, e.g. `"1720.00 MXN"`
    pub fn converted_display(&self) -> String {
        format!("{:.2} {}", self.converted, self.to)
    }

    /// Pairwise rate to four decimals, e.g. `"17.2000"`
    pub fn rate_display(&self) -> String {
        format!("{:.4}", self.rate)
    }
}

/// Convert `amount` between two supported currencies
///
/// Codes are matched case-insensitively. If either code is unsupported the
/// error names both normalized codes.
///
/// # Examples
///
/// ```
/// use travel_assistant::travel::currency::convert;
///
/// let conversion = convert(100.0, "usd", "mxn").unwrap();
/// assert_eq!(conversion.converted_display(), "1720.00 MXN");
/// ```
pub fn convert(amount: f64, from: &str, to: &str) -> Result<Conversion, LookupError> {
    let from = currency_key(from);
    let to = currency_key(to);

    let (Some(&from_rate), Some(&to_rate)) = (RATES.get(from.as_str()), RATES.get(to.as_str()))
    else {
        return Err(LookupError::Currency { from, to });
    };

    let in_base = amount / from_rate;
    Ok(Conversion {
        amount,
        converted: in_base * to_rate,
        rate: to_rate / from_rate,
        from,
        to,
    })
}

/// Supported currency codes, sorted
pub fn supported_currencies() -> Vec<&'static str> {
    let mut codes: Vec<_> = RATES.keys().copied().collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_conversion() {
        let conversion = convert(100.0, "USD", "USD").unwrap();
        assert_eq!(conversion.converted_display(), "100.00 USD");
        assert_eq!(conversion.rate_display(), "1.0000");
        assert_eq!(conversion.original_display(), "100 USD");
    }

    #[test]
    fn test_usd_to_mxn() {
        let conversion = convert(100.0, "USD", "MXN").unwrap();
        assert_eq!(conversion.converted_display(), "1720.00 MXN");
        assert_eq!(conversion.rate_display(), "17.2000");
    }

    #[test]
    fn test_cross_rate_through_base() {
        let conversion = convert(50.0, "eur", "gbp").unwrap();
        assert_eq!(conversion.from, "EUR");
        assert_eq!(conversion.to, "GBP");
        assert!((conversion.converted - 50.0 / 0.92 * 0.79).abs() < 1e-9);
        assert_eq!(conversion.rate_display(), "0.8587");
    }

    #[test]
    fn test_round_trip_within_display_precision() {
        let codes = supported_currencies();
        for amount in [0.0, 1.0, 12.5, 100.0, 9_999.99] {
            for from in &codes {
                for to in &codes {
                    let there = convert(amount, from, to).unwrap();
                    let back = convert(there.converted, to, from).unwrap();
                    assert!(
                        (back.converted - amount).abs() < 0.01,
                        "{amount} {from} -> {to} -> {from} gave {}",
                        back.converted
                    );
                }
            }
        }
    }

    #[test]
    fn test_unsupported_code_names_both() {
        let err = convert(10.0, "usd", "xyz").unwrap_err();
        assert_eq!(
            err,
            LookupError::Currency {
                from: "USD".to_string(),
                to: "XYZ".to_string()
            }
        );
    }

    #[test]
    fn test_unsupported_source_code() {
        assert!(convert(10.0, "BTC", "EUR").is_err());
        assert!(convert(10.0, "", "EUR").is_err());
    }

    #[test]
    fn test_padded_code_is_unsupported() {
        let err = convert(1.0, " usd", "EUR").unwrap_err();
        assert_eq!(
            err,
            LookupError::Currency {
                from: " USD".to_string(),
                to: "EUR".to_string()
            }
        );
        assert!(convert(1.0, "USD", "eur ").is_err());
    }

    #[test]
    fn test_fractional_amount_display() {
        let conversion = convert(12.5, "usd", "eur").unwrap();
        assert_eq!(conversion.original_display(), "12.5 USD");
        assert_eq!(conversion.converted_display(), "11.50 EUR");
    }

    #[test]
    fn test_supported_currencies() {
        assert_eq!(
            supported_currencies(),
            vec!["EUR", "GBP", "JPY", "MXN", "USD"]
        );
    }
}
