//! Tier catalog: per-tier feature limits

use once_cell::sync::Lazy;
use tracing::debug;

use crate::config::EntitlementsConfig;
use crate::core::types::{
    CapabilityFlag, FeatureLimits, Limit, LimitField, SubscriptionTier,
};
use crate::utils::error::{EntitlementError, Result};

/// Built-in limits for a tier.
///
/// The single authoritative four-tier table. Values are monotonic
/// non-decreasing in tier order; [`TierCatalog::validate`] re-checks this
/// at engine construction so a configuration override cannot break it.
pub(crate) const fn builtin_limits(tier: SubscriptionTier) -> FeatureLimits {
    match tier {
        SubscriptionTier::Free => FeatureLimits {
            max_teams: Limit::capped(1),
            max_projects: Limit::capped(3),
            max_tasks_per_project: Limit::capped(50),
            max_file_upload_mb: Limit::capped(10),
            max_storage_gb: Limit::capped(1),
            analytics_access: false,
            priority_support: false,
            custom_integrations: false,
            advanced_security: false,
            team_roles: false,
            api_access: false,
        },
        SubscriptionTier::Starter => FeatureLimits {
            max_teams: Limit::capped(3),
            max_projects: Limit::capped(15),
            max_tasks_per_project: Limit::capped(200),
            max_file_upload_mb: Limit::capped(50),
            max_storage_gb: Limit::capped(10),
            analytics_access: true,
            priority_support: false,
            custom_integrations: false,
            advanced_security: false,
            team_roles: true,
            api_access: false,
        },
        SubscriptionTier::Pro => FeatureLimits {
            max_teams: Limit::capped(10),
            max_projects: Limit::capped(50),
            max_tasks_per_project: Limit::capped(1000),
            max_file_upload_mb: Limit::capped(200),
            max_storage_gb: Limit::capped(100),
            analytics_access: true,
            priority_support: true,
            custom_integrations: true,
            advanced_security: false,
            team_roles: true,
            api_access: true,
        },
        SubscriptionTier::Enterprise => FeatureLimits {
            max_teams: Limit::UNLIMITED,
            max_projects: Limit::UNLIMITED,
            max_tasks_per_project: Limit::UNLIMITED,
            max_file_upload_mb: Limit::UNLIMITED,
            max_storage_gb: Limit::UNLIMITED,
            analytics_access: true,
            priority_support: true,
            custom_integrations: true,
            advanced_security: true,
            team_roles: true,
            api_access: true,
        },
    }
}

static BUILTIN: Lazy<TierCatalog> = Lazy::new(TierCatalog::default);

/// Tier catalog: the tier → [`FeatureLimits`] table.
///
/// Immutable once constructed. One record per tier, indexed by tier order,
/// so lookups are total and never error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierCatalog {
    limits: [FeatureLimits; 4],
}

impl Default for TierCatalog {
    fn default() -> Self {
        Self {
            limits: [
                builtin_limits(SubscriptionTier::Free),
                builtin_limits(SubscriptionTier::Starter),
                builtin_limits(SubscriptionTier::Pro),
                builtin_limits(SubscriptionTier::Enterprise),
            ],
        }
    }
}

impl TierCatalog {
    /// The compiled-in catalog, shared process-wide
    pub fn builtin() -> &'static TierCatalog {
        &BUILTIN
    }

    /// Built-in catalog with configuration overrides applied, validated.
    ///
    /// Fails loudly on any override that breaks catalog invariants; a
    /// silently wrong catalog would hand out incorrect authorization
    /// answers.
    pub fn with_overrides(config: &EntitlementsConfig) -> Result<TierCatalog> {
        let mut catalog = TierCatalog::default();
        for tier in SubscriptionTier::all() {
            if let Some(patch) = config.tier_override(tier) {
                debug!(tier = %tier, "applying tier override");
                patch.apply(&mut catalog.limits[tier as usize]);
            }
        }
        catalog.validate()?;
        Ok(catalog)
    }

    /// Feature limits for a tier. Total: every tier has a record.
    pub fn limits(&self, tier: SubscriptionTier) -> &FeatureLimits {
        &self.limits[tier as usize]
    }

    /// Check catalog invariants across all tiers.
    ///
    /// Numeric caps must be `-1` or non-negative, and both caps and
    /// capability flags must be monotonic non-decreasing in tier order,
    /// with unlimited above any finite value.
    pub fn validate(&self) -> Result<()> {
        for tier in SubscriptionTier::all() {
            for field in LimitField::all() {
                let raw = self.limits(tier).limit(field).raw();
                if raw < -1 {
                    return Err(EntitlementError::config(format!(
                        "{field} for tier '{tier}' is {raw}; caps must be -1 (unlimited) or non-negative"
                    )));
                }
            }
        }

        for pair in SubscriptionTier::all().windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            for field in LimitField::all() {
                let low = self.limits(lower).limit(field);
                let high = self.limits(upper).limit(field);
                if !cap_non_decreasing(low, high) {
                    return Err(EntitlementError::config(format!(
                        "{field} decreases from tier '{lower}' ({low}) to tier '{upper}' ({high})"
                    )));
                }
            }
            for flag in CapabilityFlag::all() {
                if self.limits(lower).capability(flag) && !self.limits(upper).capability(flag) {
                    return Err(EntitlementError::config(format!(
                        "{flag} is enabled for tier '{lower}' but disabled for tier '{upper}'"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Cap ordering with unlimited above any finite value.
fn cap_non_decreasing(low: Limit, high: Limit) -> bool {
    match (low.value(), high.value()) {
        (_, None) => true,
        (None, Some(_)) => false,
        (Some(l), Some(h)) => h >= l,
    }
}
