//! Flight fare lookup over the mock route table
//!
//! Routes are undirected: the table key is the city pair in sorted order,
//! so `(a, b)` and `(b, a)` always resolve to the same fare.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::LookupError;
use crate::travel::normalize::{city_key, title_case};

/// Canned fare for one route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fare {
    /// Price in USD
    pub price: u32,
    /// Free-text flight duration
    pub duration: &'static str,
    /// Operating airline
    pub airline: &'static str,
}

/// Order-independent pair of normalized city keys
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RouteKey(String, String);

impl RouteKey {
    fn new(a: &str, b: &str) -> Self {
        let (a, b) = (city_key(a), city_key(b));
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

static ROUTES: LazyLock<HashMap<RouteKey, Fare>> = LazyLock::new(|| {
    [
        ("campeche", "paris", 850, "14h", "Air France"),
        ("campeche", "london", 780, "13h", "British Airways"),
        ("campeche", "tokyo", 1100, "22h", "ANA"),
        ("campeche", "new york", 420, "5h", "Delta"),
        ("london", "paris", 95, "1h20m", "Eurostar"),
    ]
    .into_iter()
    .map(|(a, b, price, duration, airline)| {
        (
            RouteKey::new(a, b),
            Fare {
                price,
                duration,
                airline,
            },
        )
    })
    .collect()
});

/// A successful fare lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightQuote {
    /// Title-cased origin as supplied by the caller
    pub origin: String,
    /// Title-cased destination as supplied by the caller
    pub destination: String,
    /// The matched fare
    #[serde(flatten)]
    pub fare: Fare,
}

/// Look up the mock fare between two cities in either direction
///
/// # Examples
///
/// ```
/// use travel_assistant::travel::flights::flight_quote;
///
/// let quote = flight_quote("campeche", "tokyo").unwrap();
/// assert_eq!(quote.fare.price, 1100);
/// assert_eq!(quote.fare.airline, "ANA");
/// ```
pub fn flight_quote(origin: &str, destination: &str) -> Result<FlightQuote, LookupError> {
    ROUTES
        .get(&RouteKey::new(origin, destination))
        .map(|fare| FlightQuote {
            origin: title_case(origin),
            destination: title_case(destination),
            fare: *fare,
        })
        .ok_or_else(|| LookupError::Route {
            origin: origin.to_string(),
            destination: destination.to_string(),
        })
}

/// Known routes as sorted city-key pairs
pub fn known_routes() -> Vec<(String, String)> {
    let mut routes: Vec<_> = ROUTES
        .keys()
        .map(|RouteKey(a, b)| (a.clone(), b.clone()))
        .collect();
    routes.sort_unstable();
    routes
}
