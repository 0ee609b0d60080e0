//! Engine core functionality

use tracing::info;

use crate::config::EntitlementsConfig;
use crate::core::catalog::{RoleCatalog, TierCatalog};
use crate::core::entitlements::LimitCheck;
use crate::core::permissions::{
    TransitionDecision, assignable_roles, max_assignable_role, validate_role_transition,
};
use crate::core::types::{
    FeatureKey, FeatureLimits, LimitField, Permission, PermissionContext, RolePermissions,
    SubscriptionTier, UserRole,
};
use crate::utils::error::Result;

/// The handler-facing entry point for every entitlement decision.
///
/// Constructed once at startup and shared; all methods take `&self` and
/// hold no interior mutability, so concurrent request handlers need no
/// coordination. Callers remain responsible for building each
/// [`PermissionContext`] from a consistent role/tier snapshot.
#[derive(Debug, Clone)]
pub struct EntitlementEngine {
    catalog: TierCatalog,
}

impl Default for EntitlementEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EntitlementEngine {
    /// Engine over the built-in tier catalog
    pub fn new() -> Self {
        info!("Initializing entitlement engine with built-in catalog");
        Self {
            catalog: TierCatalog::builtin().clone(),
        }
    }

    /// Engine with configuration overrides applied and validated.
    ///
    /// Fails on any override that breaks the catalog invariants; the
    /// engine never starts with an un-validated catalog.
    pub fn with_config(config: &EntitlementsConfig) -> Result<Self> {
        info!("Initializing entitlement engine from configuration");
        let catalog = TierCatalog::with_overrides(config)?;
        info!("Entitlement engine initialized successfully");
        Ok(Self { catalog })
    }

    /// The active tier catalog
    pub fn catalog(&self) -> &TierCatalog {
        &self.catalog
    }

    /// Feature limits for a tier
    pub fn limits(&self, tier: SubscriptionTier) -> &FeatureLimits {
        self.catalog.limits(tier)
    }

    /// Permission record for a role
    pub fn role_permissions(&self, role: UserRole) -> &'static RolePermissions {
        RoleCatalog::permissions(role)
    }

    /// Whether a tier grants a boolean capability
    pub fn can_access_feature(&self, tier: SubscriptionTier, key: FeatureKey) -> Result<bool> {
        self.catalog.can_access_feature(tier, key)
    }

    /// Whether a usage count has reached a tier's cap
    pub fn has_reached_limit(
        &self,
        tier: SubscriptionTier,
        key: FeatureKey,
        current: i64,
    ) -> Result<bool> {
        self.catalog.has_reached_limit(tier, key, current)
    }

    /// Structured usage-limit check carrying cap and headroom
    pub fn check_limit(
        &self,
        tier: SubscriptionTier,
        field: LimitField,
        current: i64,
    ) -> Result<LimitCheck> {
        self.catalog.check_limit(tier, field, current)
    }

    /// Whether the actor holds a permission
    pub fn has_permission(&self, context: &PermissionContext, permission: Permission) -> bool {
        context.has_permission(permission)
    }

    /// Validate a role change on a team member
    pub fn validate_role_transition(
        &self,
        from_role: UserRole,
        to_role: UserRole,
        actor_role: UserRole,
        tier: SubscriptionTier,
    ) -> TransitionDecision {
        validate_role_transition(from_role, to_role, actor_role, tier)
    }

    /// The highest role a tier allows assigning
    pub fn max_assignable_role(&self, tier: SubscriptionTier) -> UserRole {
        max_assignable_role(tier)
    }

    /// The roles an actor may assign on the given tier
    pub fn assignable_roles(&self, actor_role: UserRole, tier: SubscriptionTier) -> Vec<UserRole> {
        assignable_roles(actor_role, tier)
    }
}
