//! Helper functions for creating specific error types

use super::types::EntitlementError;

/// Helper functions for creating specific errors
impl EntitlementError {
    pub fn unknown_key<S: Into<String>>(message: S) -> Self {
        Self::UnknownKey(message.into())
    }

    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }
}
