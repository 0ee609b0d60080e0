//! Feature access and usage-limit checks

use serde::{Deserialize, Serialize};

use crate::core::catalog::TierCatalog;
use crate::core::types::{FeatureKey, Limit, LimitField, SubscriptionTier};
use crate::utils::error::{EntitlementError, Result};

/// Outcome of a usage-limit check.
///
/// Handlers surface `allowed == false` as an upgrade prompt; `remaining`
/// feeds quota meters in the UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LimitCheck {
    /// Whether creating one more resource is allowed
    pub allowed: bool,
    /// The tier's cap for the checked field
    pub limit: Limit,
    /// The usage count that was checked
    pub current: i64,
    /// Headroom left under the cap, absent when unlimited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<i64>,
}

impl TierCatalog {
    /// Whether a tier grants a boolean capability.
    ///
    /// Only valid for capability flags: asking about a numeric cap is a
    /// caller error, not a truthy coercion of a positive cap.
    pub fn can_access_feature(&self, tier: SubscriptionTier, key: FeatureKey) -> Result<bool> {
        match key {
            FeatureKey::Capability(flag) => Ok(self.limits(tier).capability(flag)),
            FeatureKey::Limit(field) => Err(EntitlementError::invalid_argument(format!(
                "'{field}' is a numeric cap; use a limit check for it"
            ))),
        }
    }

    /// Whether a usage count has reached a tier's cap.
    ///
    /// Unlimited caps are never reached. A count equal to the cap blocks
    /// creating one more; one below the cap leaves room for exactly one.
    /// Only valid for numeric caps, and `current` must be non-negative.
    pub fn has_reached_limit(
        &self,
        tier: SubscriptionTier,
        key: FeatureKey,
        current: i64,
    ) -> Result<bool> {
        match key {
            FeatureKey::Limit(field) => Ok(!self.check_limit(tier, field, current)?.allowed),
            FeatureKey::Capability(flag) => Err(EntitlementError::invalid_argument(format!(
                "'{flag}' is a capability flag; use a feature access check for it"
            ))),
        }
    }

    /// Structured usage-limit check carrying cap and headroom.
    pub fn check_limit(
        &self,
        tier: SubscriptionTier,
        field: LimitField,
        current: i64,
    ) -> Result<LimitCheck> {
        if current < 0 {
            return Err(EntitlementError::invalid_argument(format!(
                "current count for '{field}' is {current}; counts must be non-negative"
            )));
        }

        let limit = self.limits(tier).limit(field);
        Ok(LimitCheck {
            allowed: !limit.reached_by(current),
            limit,
            current,
            remaining: limit.remaining(current),
        })
    }
}
