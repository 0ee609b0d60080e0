//! Error handling for the entitlement engine

mod helpers;
mod types;

pub use types::{EntitlementError, Result};
