//! Configuration models

use serde::{Deserialize, Serialize};

use crate::core::types::{FeatureLimits, Limit, SubscriptionTier};

/// Entitlements configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntitlementsConfig {
    /// Per-tier overrides applied over the built-in catalog
    #[serde(default)]
    pub tiers: TierOverrides,
}

impl EntitlementsConfig {
    /// The override for a tier, if configured
    pub fn tier_override(&self, tier: SubscriptionTier) -> Option<&TierOverride> {
        match tier {
            SubscriptionTier::Free => self.tiers.free.as_ref(),
            SubscriptionTier::Starter => self.tiers.starter.as_ref(),
            SubscriptionTier::Pro => self.tiers.pro.as_ref(),
            SubscriptionTier::Enterprise => self.tiers.enterprise.as_ref(),
        }
    }

    /// Merge configurations, `other` winning where it sets an override
    pub fn merge(mut self, other: Self) -> Self {
        if other.tiers.free.is_some() {
            self.tiers.free = other.tiers.free;
        }
        if other.tiers.starter.is_some() {
            self.tiers.starter = other.tiers.starter;
        }
        if other.tiers.pro.is_some() {
            self.tiers.pro = other.tiers.pro;
        }
        if other.tiers.enterprise.is_some() {
            self.tiers.enterprise = other.tiers.enterprise;
        }
        self
    }
}

/// Optional override per tier
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TierOverrides {
    /// Free tier override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free: Option<TierOverride>,
    /// Starter tier override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starter: Option<TierOverride>,
    /// Pro tier override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pro: Option<TierOverride>,
    /// Enterprise tier override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise: Option<TierOverride>,
}

/// A partial [`FeatureLimits`] patch.
///
/// Unset fields keep the built-in value. Numeric fields accept `-1` for
/// unlimited, matching the wire schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TierOverride {
    /// Teams an account may create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_teams: Option<i64>,
    /// Projects per team
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_projects: Option<i64>,
    /// Tasks per project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tasks_per_project: Option<i64>,
    /// Single file upload size in megabytes
    #[serde(default, rename = "maxFileUploadMB", skip_serializing_if = "Option::is_none")]
    pub max_file_upload_mb: Option<i64>,
    /// Total storage in gigabytes
    #[serde(default, rename = "maxStorageGB", skip_serializing_if = "Option::is_none")]
    pub max_storage_gb: Option<i64>,
    /// Usage analytics dashboards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_access: Option<bool>,
    /// Priority support channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_support: Option<bool>,
    /// Custom integrations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_integrations: Option<bool>,
    /// Advanced security controls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_security: Option<bool>,
    /// Role-based access control beyond owner/member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_roles: Option<bool>,
    /// Public API access
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_access: Option<bool>,
}

impl TierOverride {
    /// Apply this patch to a limits record
    pub fn apply(&self, limits: &mut FeatureLimits) {
        if let Some(v) = self.max_teams {
            limits.max_teams = Limit::capped(v);
        }
        if let Some(v) = self.max_projects {
            limits.max_projects = Limit::capped(v);
        }
        if let Some(v) = self.max_tasks_per_project {
            limits.max_tasks_per_project = Limit::capped(v);
        }
        if let Some(v) = self.max_file_upload_mb {
            limits.max_file_upload_mb = Limit::capped(v);
        }
        if let Some(v) = self.max_storage_gb {
            limits.max_storage_gb = Limit::capped(v);
        }
        if let Some(v) = self.analytics_access {
            limits.analytics_access = v;
        }
        if let Some(v) = self.priority_support {
            limits.priority_support = v;
        }
        if let Some(v) = self.custom_integrations {
            limits.custom_integrations = v;
        }
        if let Some(v) = self.advanced_security {
            limits.advanced_security = v;
        }
        if let Some(v) = self.team_roles {
            limits.team_roles = v;
        }
        if let Some(v) = self.api_access {
            limits.api_access = v;
        }
    }
}
