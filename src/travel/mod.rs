//! Mock travel lookups
//!
//! Four independent, pure lookups over read-only tables built once per
//! process. None of them performs I/O, and all of them can be called
//! concurrently without coordination. A miss is returned as a
//! [`LookupError`](crate::error::LookupError), never as a panic.

pub mod currency;
pub mod flights;
pub mod normalize;
pub mod recommendations;
pub mod weather;

pub use currency::{convert, Conversion};
pub use flights::{flight_quote, FlightQuote};
pub use recommendations::{city_guide, CityGuide};
pub use weather::{weather_report, WeatherReport};
