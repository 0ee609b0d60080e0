//! Configuration for the entitlement engine
//!
//! Deployments may patch individual tier caps and capability flags over
//! the built-in catalog. Overrides are applied once at engine
//! construction and validated against the catalog invariants; there is no
//! runtime mutation surface.

mod models;
#[cfg(test)]
mod tests;
mod validation;

pub use models::{EntitlementsConfig, TierOverride, TierOverrides};
pub use validation::Validate;

use std::path::Path;
use tracing::{debug, info};

use crate::utils::error::{EntitlementError, Result};

impl EntitlementsConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading entitlements configuration from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| {
            EntitlementError::config(format!("Failed to read config file: {e}"))
        })?;

        let config: EntitlementsConfig = serde_yaml::from_str(&content)
            .map_err(|e| EntitlementError::config(format!("Failed to parse config: {e}")))?;

        config.validate()?;

        debug!("Entitlements configuration loaded successfully");
        Ok(config)
    }
}
