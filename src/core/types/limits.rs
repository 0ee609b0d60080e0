//! Feature limits and the unlimited sentinel

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::EntitlementError;

/// A numeric cap with an explicit unlimited sentinel.
///
/// The wire value `-1` means "no finite cap" and matches the upstream
/// document schema. All comparisons go through [`Limit::reached_by`] and
/// [`Limit::remaining`], which treat the sentinel as infinity; the raw
/// value is never compared as a literal count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Limit(i64);

impl Limit {
    /// The unlimited sentinel
    pub const UNLIMITED: Limit = Limit(-1);

    /// A finite cap
    pub const fn capped(value: i64) -> Limit {
        Limit(value)
    }

    /// Whether this is the unlimited sentinel
    pub fn is_unlimited(self) -> bool {
        self.0 == -1
    }

    /// The finite cap value, `None` when unlimited
    pub fn value(self) -> Option<i64> {
        if self.is_unlimited() { None } else { Some(self.0) }
    }

    /// Raw wire value, `-1` when unlimited
    pub fn raw(self) -> i64 {
        self.0
    }

    /// Whether a usage count has reached this cap.
    ///
    /// Unlimited is never reached. At-cap counts as reached: a team already
    /// holding `cap` resources may not create one more.
    pub fn reached_by(self, current: i64) -> bool {
        !self.is_unlimited() && current >= self.0
    }

    /// Headroom left under this cap, `None` when unlimited.
    ///
    /// Saturates at zero for counts at or above the cap.
    pub fn remaining(self, current: i64) -> Option<i64> {
        self.value().map(|cap| (cap - current).max(0))
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unlimited() {
            f.write_str("unlimited")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Numeric cap fields of [`FeatureLimits`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LimitField {
    /// Teams an account may create
    #[serde(rename = "maxTeams")]
    MaxTeams,
    /// Projects per team
    #[serde(rename = "maxProjects")]
    MaxProjects,
    /// Tasks per project
    #[serde(rename = "maxTasksPerProject")]
    MaxTasksPerProject,
    /// Single file upload size in megabytes
    #[serde(rename = "maxFileUploadMB")]
    MaxFileUploadMb,
    /// Total storage in gigabytes
    #[serde(rename = "maxStorageGB")]
    MaxStorageGb,
}

impl LimitField {
    /// All numeric cap fields
    pub fn all() -> [LimitField; 5] {
        [
            Self::MaxTeams,
            Self::MaxProjects,
            Self::MaxTasksPerProject,
            Self::MaxFileUploadMb,
            Self::MaxStorageGb,
        ]
    }

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MaxTeams => "maxTeams",
            Self::MaxProjects => "maxProjects",
            Self::MaxTasksPerProject => "maxTasksPerProject",
            Self::MaxFileUploadMb => "maxFileUploadMB",
            Self::MaxStorageGb => "maxStorageGB",
        }
    }
}

impl FromStr for LimitField {
    type Err = EntitlementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maxTeams" => Ok(Self::MaxTeams),
            "maxProjects" => Ok(Self::MaxProjects),
            "maxTasksPerProject" => Ok(Self::MaxTasksPerProject),
            "maxFileUploadMB" => Ok(Self::MaxFileUploadMb),
            "maxStorageGB" => Ok(Self::MaxStorageGb),
            other => Err(EntitlementError::unknown_key(format!(
                "limit field '{other}'"
            ))),
        }
    }
}

impl fmt::Display for LimitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean capability flags of [`FeatureLimits`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CapabilityFlag {
    /// Usage analytics dashboards
    #[serde(rename = "analyticsAccess")]
    AnalyticsAccess,
    /// Priority support channel
    #[serde(rename = "prioritySupport")]
    PrioritySupport,
    /// Custom integrations
    #[serde(rename = "customIntegrations")]
    CustomIntegrations,
    /// Advanced security controls
    #[serde(rename = "advancedSecurity")]
    AdvancedSecurity,
    /// Role-based access control beyond owner/member
    #[serde(rename = "teamRoles")]
    TeamRoles,
    /// Public API access
    #[serde(rename = "apiAccess")]
    ApiAccess,
}

impl CapabilityFlag {
    /// All capability flags
    pub fn all() -> [CapabilityFlag; 6] {
        [
            Self::AnalyticsAccess,
            Self::PrioritySupport,
            Self::CustomIntegrations,
            Self::AdvancedSecurity,
            Self::TeamRoles,
            Self::ApiAccess,
        ]
    }

    /// Wire name of the flag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnalyticsAccess => "analyticsAccess",
            Self::PrioritySupport => "prioritySupport",
            Self::CustomIntegrations => "customIntegrations",
            Self::AdvancedSecurity => "advancedSecurity",
            Self::TeamRoles => "teamRoles",
            Self::ApiAccess => "apiAccess",
        }
    }
}

impl FromStr for CapabilityFlag {
    type Err = EntitlementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "analyticsAccess" => Ok(Self::AnalyticsAccess),
            "prioritySupport" => Ok(Self::PrioritySupport),
            "customIntegrations" => Ok(Self::CustomIntegrations),
            "advancedSecurity" => Ok(Self::AdvancedSecurity),
            "teamRoles" => Ok(Self::TeamRoles),
            "apiAccess" => Ok(Self::ApiAccess),
            other => Err(EntitlementError::unknown_key(format!(
                "capability flag '{other}'"
            ))),
        }
    }
}

impl fmt::Display for CapabilityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any feature name: a numeric cap or a boolean capability.
///
/// Handlers that receive feature names as strings parse them into this
/// enum; an unrecognized name fails with `UnknownKey` instead of falling
/// through to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKey {
    /// A numeric cap field
    Limit(LimitField),
    /// A boolean capability flag
    Capability(CapabilityFlag),
}

impl FeatureKey {
    /// Wire name of the feature
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit(field) => field.as_str(),
            Self::Capability(flag) => flag.as_str(),
        }
    }
}

impl FromStr for FeatureKey {
    type Err = EntitlementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(field) = s.parse::<LimitField>() {
            return Ok(Self::Limit(field));
        }
        if let Ok(flag) = s.parse::<CapabilityFlag>() {
            return Ok(Self::Capability(flag));
        }
        Err(EntitlementError::unknown_key(format!("feature '{s}'")))
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feature limits for one subscription tier.
///
/// Wire names keep the document schema's camelCase spelling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureLimits {
    /// Teams an account may create
    pub max_teams: Limit,
    /// Projects per team
    pub max_projects: Limit,
    /// Tasks per project
    pub max_tasks_per_project: Limit,
    /// Single file upload size in megabytes
    #[serde(rename = "maxFileUploadMB")]
    pub max_file_upload_mb: Limit,
    /// Total storage in gigabytes
    #[serde(rename = "maxStorageGB")]
    pub max_storage_gb: Limit,
    /// Usage analytics dashboards
    pub analytics_access: bool,
    /// Priority support channel
    pub priority_support: bool,
    /// Custom integrations
    pub custom_integrations: bool,
    /// Advanced security controls
    pub advanced_security: bool,
    /// Role-based access control beyond owner/member
    pub team_roles: bool,
    /// Public API access
    pub api_access: bool,
}

impl FeatureLimits {
    /// The cap for a numeric field
    pub fn limit(&self, field: LimitField) -> Limit {
        match field {
            LimitField::MaxTeams => self.max_teams,
            LimitField::MaxProjects => self.max_projects,
            LimitField::MaxTasksPerProject => self.max_tasks_per_project,
            LimitField::MaxFileUploadMb => self.max_file_upload_mb,
            LimitField::MaxStorageGb => self.max_storage_gb,
        }
    }

    /// The value of a boolean capability flag
    pub fn capability(&self, flag: CapabilityFlag) -> bool {
        match flag {
            CapabilityFlag::AnalyticsAccess => self.analytics_access,
            CapabilityFlag::PrioritySupport => self.priority_support,
            CapabilityFlag::CustomIntegrations => self.custom_integrations,
            CapabilityFlag::AdvancedSecurity => self.advanced_security,
            CapabilityFlag::TeamRoles => self.team_roles,
            CapabilityFlag::ApiAccess => self.api_access,
        }
    }
}
