//! Error types for the swipedeck crate.
//!
//! This module defines the centralized error type [`SwipeDeckError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The gesture core never surfaces these to the host: anomalies during a gesture
//! degrade to a no-op or a snap back. Errors appear at the edges instead, when
//! loading configuration, reading replay traces, or when a transition function is
//! asked to perform an impossible state change.

use thiserror::Error;

/// The main error type for swipedeck operations.
///
/// # Examples
///
/// ```
/// use swipedeck::SwipeDeckError;
///
/// fn validate_threshold(value: f64) -> Result<(), SwipeDeckError> {
///     if value <= 0.0 {
///         return Err(SwipeDeckError::Config("threshold must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_threshold(-1.0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum SwipeDeckError {
    /// Configuration is invalid or missing.
    ///
    /// Occurs when a tunable is non-finite or out of range, or when a host
    /// supplies an unusable value such as a zero-width viewport.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML configuration file could not be parsed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A replay trace or JSON payload could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A transition function was called from a state that does not permit it.
    ///
    /// The engine treats this as a stale request: it logs and resets the
    /// animator to idle rather than propagating.
    #[error("Invalid transition: cannot {op} while {from}")]
    InvalidTransition {
        /// State the animator was in when the transition was requested.
        from: String,
        /// Name of the rejected transition.
        op: &'static str,
    },
}

/// A specialized `Result` type for swipedeck operations.
pub type Result<T> = std::result::Result<T, SwipeDeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_message_names_state_and_op() {
        let err = SwipeDeckError::InvalidTransition {
            from: "committing".to_string(),
            op: "begin drag",
        };
        assert_eq!(err.to_string(), "Invalid transition: cannot begin drag while committing");
    }

    #[test]
    fn json_errors_convert() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: SwipeDeckError = parse.unwrap_err().into();
        assert!(matches!(err, SwipeDeckError::Json(_)));
    }
}
