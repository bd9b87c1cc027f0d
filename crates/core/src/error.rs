//! `LatencyKit` Core Error System
//!
//! Only contract and domain failures are errors. Expected capacity outcomes
//! (queue full or empty, pool exhausted) are reported through `bool`,
//! `Option` and `Result<_, T>` on the containers themselves and never reach
//! this module.

use thiserror::Error;

/// Core result type for all fallible operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Enum-keyed map errors (programmer or configuration mistakes)
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Key ordinal does not fit the sparse index table
    #[error("Key ordinal {ordinal} out of range for domain of {domain} ordinals")]
    KeyOutOfRange {
        /// Ordinal of the rejected key
        ordinal: usize,
        /// Size of the ordinal domain
        domain: usize,
    },

    /// Dense storage has no room for another key
    #[error("Map is full: capacity {capacity}")]
    MapFull {
        /// Map capacity
        capacity: usize,
    },
}

/// Lap timer errors
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// Fixed lap storage is used up
    #[error("Timer capacity exceeded: {capacity} laps")]
    CapacityExceeded {
        /// Number of laps the timer was created for
        capacity: usize,
    },
}

/// Main error type for core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Enum-keyed map contract violation
    #[error("Map error: {0}")]
    Map(#[from] MapError),

    /// Lap timer contract violation
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation errors
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Reason for validation failure
        reason: String,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parse errors
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

// Convenience constructors for common errors
impl CoreError {
    /// Create configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create validation error
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the map error if this is one
    #[must_use]
    pub const fn as_map_error(&self) -> Option<MapError> {
        match self {
            Self::Map(err) => Some(*err),
            _ => None,
        }
    }
}
