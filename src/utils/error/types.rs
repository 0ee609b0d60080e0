//! Error types for the entitlement engine

use thiserror::Error;

/// Result type alias for the entitlement engine
pub type Result<T> = std::result::Result<T, EntitlementError>;

/// Main error type for the entitlement engine
///
/// Every variant here is a programmer error (bad input) or a startup
/// configuration failure. A policy rejection is never an error: limit and
/// permission checks answer `false`, and role transitions answer with a
/// reasoned [`TransitionDecision`](crate::TransitionDecision).
#[derive(Error, Debug)]
pub enum EntitlementError {
    /// A tier, role, permission, or feature name outside the closed enums
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// A structurally invalid argument, such as a negative usage count or a
    /// capability check against a numeric cap
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
