//! Weather lookup over the mock conditions table

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::LookupError;
use crate::travel::normalize::{city_key, title_case};

/// Canned conditions for one city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Conditions {
    /// Temperature in degrees Celsius
    pub temperature_c: i32,
    /// Free-text sky condition
    pub condition: &'static str,
    /// Chance of rain in percent
    pub rain_chance: u8,
}

static WEATHER: LazyLock<HashMap<&'static str, Conditions>> = LazyLock::new(|| {
    HashMap::from([
        ("london", conditions(18, "nublado", 70)),
        ("paris", conditions(25, "soleado", 5)),
        ("tokyo", conditions(22, "parcialmente nublado", 20)),
        ("new york", conditions(15, "ventoso", 30)),
        ("campeche", conditions(34, "caluroso y húmedo", 60)),
    ])
});

const fn conditions(temperature_c: i32, condition: &'static str, rain_chance: u8) -> Conditions {
    Conditions {
        temperature_c,
        condition,
        rain_chance,
    }
}

/// A successful weather lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherReport {
    /// Title-cased city as supplied by the caller
    pub city: String,
    /// The matched table record
    pub conditions: Conditions,
}

impl WeatherReport {
    /// Render the single-line report handed to the agent runtime
    pub fn summary(&self) -> String {
        format!(
            "{}: {}, {}°C, {}% de probabilidad de lluvia.",
            self.city,
            self.conditions.condition,
            self.conditions.temperature_c,
            self.conditions.rain_chance
        )
    }
}

/// Look up current (mock) weather for a city
///
/// The lookup is case-insensitive. A miss returns
/// [`LookupError::Weather`] naming the city as given.
///
/// # Examples
///
/// ```
/// use travel_assistant::travel::weather::weather_report;
///
/// let report = weather_report("Paris").unwrap();
/// assert_eq!(report.conditions.temperature_c, 25);
/// assert!(weather_report("Atlantis").is_err());
/// ```
pub fn weather_report(city: &str) -> Result<WeatherReport, LookupError> {
    WEATHER
        .get(city_key(city).as_str())
        .map(|conditions| WeatherReport {
            city: title_case(city),
            conditions: *conditions,
        })
        .ok_or_else(|| LookupError::Weather {
            city: city.to_string(),
        })
}

/// Cities with a weather record, sorted
pub fn known_cities() -> Vec<&'static str> {
    let mut cities: Vec<_> = WEATHER.keys().copied().collect();
    cities.sort_unstable();
    cities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paris_report_contents() {
        let summary = weather_report("paris").unwrap().summary();
        assert!(summary.contains("Paris"));
        assert!(summary.contains("soleado"));
        assert!(summary.contains("25"));
        assert!(summary.contains("5"));
        assert_eq!(
            summary,
            "Paris: soleado, 25°C, 5% de probabilidad de lluvia."
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        for city in known_cities() {
            let lower = weather_report(city).unwrap();
            let upper = weather_report(&city.to_uppercase()).unwrap();
            assert_eq!(lower.summary(), upper.summary());
        }
    }

    #[test]
    fn test_multiword_city_is_title_cased() {
        let report = weather_report("NEW YORK").unwrap();
        assert_eq!(report.city, "New York");
        assert_eq!(report.conditions.condition, "ventoso");
    }

    #[test]
    fn test_unknown_city_names_input() {
        let err = weather_report("Gotham").unwrap_err();
        assert_eq!(
            err,
            LookupError::Weather {
                city: "Gotham".to_string()
            }
        );
        assert!(err.to_string().contains("Gotham"));
    }

    #[test]
    fn test_padded_city_is_a_miss() {
        let err = weather_report(" paris ").unwrap_err();
        assert_eq!(err.to_string(), "No hay datos del clima para ' paris '.");
    }

    #[test]
    fn test_empty_city_is_a_miss() {
        assert!(weather_report("").is_err());
    }

    #[test]
    fn test_known_cities_sorted() {
        assert_eq!(
            known_cities(),
            vec!["campeche", "london", "new york", "paris", "tokyo"]
        );
    }
}
