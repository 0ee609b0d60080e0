//! Subscription tier definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::EntitlementError;

/// Subscription tier attached to an account.
///
/// Tiers are strictly ordered by capability: every bounded limit and every
/// capability flag is non-decreasing from `Free` up to `Enterprise`. The
/// tier is mutated only by payment confirmation or administrative
/// downgrade upstream; this crate only reads it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    /// Free tier
    Free,
    /// Starter tier
    Starter,
    /// Pro tier
    Pro,
    /// Enterprise tier
    Enterprise,
}

impl SubscriptionTier {
    /// All tiers in ascending capability order
    pub fn all() -> [SubscriptionTier; 4] {
        [Self::Free, Self::Starter, Self::Pro, Self::Enterprise]
    }

    /// Wire name of the tier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Starter => "starter",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    /// Whether this is a paid tier
    pub fn is_paid(&self) -> bool {
        !matches!(self, Self::Free)
    }
}

impl FromStr for SubscriptionTier {
    type Err = EntitlementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "starter" => Ok(Self::Starter),
            "pro" => Ok(Self::Pro),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(EntitlementError::unknown_key(format!(
                "subscription tier '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
