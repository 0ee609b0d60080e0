//! Configuration validation

use super::models::{EntitlementsConfig, TierOverride};
use crate::core::types::SubscriptionTier;
use crate::utils::error::{EntitlementError, Result};

/// Validation of configuration values
pub trait Validate {
    /// Check the configuration, failing on the first violation
    fn validate(&self) -> Result<()>;
}

impl Validate for EntitlementsConfig {
    fn validate(&self) -> Result<()> {
        for tier in SubscriptionTier::all() {
            if let Some(patch) = self.tier_override(tier) {
                validate_override(tier, patch)?;
            }
        }
        Ok(())
    }
}

/// Numeric override values must be `-1` (unlimited) or non-negative.
///
/// Cross-tier monotonicity is the catalog's concern and is checked after
/// the patches are applied.
fn validate_override(tier: SubscriptionTier, patch: &TierOverride) -> Result<()> {
    let caps = [
        ("maxTeams", patch.max_teams),
        ("maxProjects", patch.max_projects),
        ("maxTasksPerProject", patch.max_tasks_per_project),
        ("maxFileUploadMB", patch.max_file_upload_mb),
        ("maxStorageGB", patch.max_storage_gb),
    ];
    for (name, value) in caps {
        if let Some(v) = value {
            if v < -1 {
                return Err(EntitlementError::config(format!(
                    "{name} for tier '{tier}' is {v}; caps must be -1 (unlimited) or non-negative"
                )));
            }
        }
    }
    Ok(())
}
