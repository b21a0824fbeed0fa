//! Error types for the travel assistant
//!
//! Application errors (configuration, tool dispatch, I/O) live in
//! [`TravelError`]. Lookup misses are a separate taxonomy, [`LookupError`],
//! because they are ordinary outcomes that the tool layer turns into
//! `status: "error"` results instead of propagating.

use thiserror::Error;

/// Main error type for travel assistant operations
#[derive(Error, Debug)]
pub enum TravelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tool argument or execution errors
    #[error("Tool execution error: {0}")]
    Tool(String),

    /// A tool name that is not registered
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A key that is absent from one of the mock tables
///
/// Every variant is a NotFound case. The display text is the message shown
/// to the end user, so it names the input exactly as the caller gave it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No weather record for the city
    #[error("No hay datos del clima para '{city}'.")]
    Weather {
        /// City as supplied by the caller
        city: String,
    },

    /// No route between the two cities in either direction
    #[error("No se encontraron vuelos de {origin} a {destination}.")]
    Route {
        /// Origin as supplied by the caller
        origin: String,
        /// Destination as supplied by the caller
        destination: String,
    },

    /// No city guide for the city
    #[error("No hay recomendaciones disponibles para '{city}'.")]
    Recommendations {
        /// City as supplied by the caller
        city: String,
    },

    /// One or both currency codes are not in the rate table
    #[error("Moneda no soportada: {from} o {to}")]
    Currency {
        /// Normalized source code
        from: String,
        /// Normalized target code
        to: String,
    },
}

/// Result type alias for travel assistant operations
///
/// Uses `anyhow::Error` so callers can attach context while propagating.
pub type Result<T> = anyhow::Result<T>;
