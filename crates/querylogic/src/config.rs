//! Connection configuration resolved from the environment.
//!
//! Client implementations consume this when building connections; the
//! materializer itself never reads it.

use std::env;

/// Environment variable names
mod vars {
    pub const CONNECTION_STRING: &str = "QUERYLOGIC_CONNECTION_STRING";
}

/// Resolved connection settings for an underlying database client.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    connection_string: String,
}

impl ConnectionConfig {
    /// Build from an explicit connection string.
    #[must_use]
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
        }
    }

    /// Load from `QUERYLOGIC_CONNECTION_STRING`, if set and non-empty.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        match env::var(vars::CONNECTION_STRING) {
            Ok(value) if !value.is_empty() => Some(Self::new(value)),
            _ => None,
        }
    }

    /// Resolve a connection string: an explicit value wins over the
    /// environment.
    #[must_use]
    pub fn resolve(explicit: Option<&str>) -> Option<Self> {
        explicit.map_or_else(Self::from_env, |value| Some(Self::new(value)))
    }

    /// The resolved connection string.
    #[must_use]
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}
