//! # TaskHub Entitlements
//!
//! Entitlement and role-permission evaluation engine for the TaskHub
//! project-management platform.
//!
//! Request handlers build a [`PermissionContext`] from a consistent snapshot
//! of the actor's team role and subscription tier, then ask this crate
//! yes/no questions before touching storage. Every evaluation is a pure,
//! synchronous function of its inputs: no I/O, no shared mutable state, and
//! the catalogs are immutable after startup, so concurrent callers need no
//! coordination.
//!
//! ## Features
//!
//! - **Tier catalog**: per-tier feature limits with an explicit unlimited
//!   sentinel and whole-catalog monotonicity validation
//! - **Usage-limit enforcement**: at-cap semantics for teams, projects,
//!   tasks, file sizes, and storage
//! - **Role permissions**: per-role action flags with the free-tier
//!   owner/everyone-else collapse
//! - **Ownership escape hatches**: project owners and task creators keep
//!   control of what they created, independent of role
//! - **Role transition validation**: guarded promote/demote rules with
//!   stable, user-facing rejection reasons
//! - **Deploy-time overrides**: optional YAML configuration patched over
//!   the built-in catalog at engine construction
//!
//! ## Quick Start
//!
//! ```rust
//! use taskhub_entitlements::{
//!     EntitlementEngine, LimitField, Permission, PermissionContext,
//!     SubscriptionTier, UserRole,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = EntitlementEngine::new();
//!
//!     // Gate resource creation on the tier's cap.
//!     let check = engine.check_limit(SubscriptionTier::Free, LimitField::MaxProjects, 3)?;
//!     assert!(!check.allowed);
//!
//!     // Gate an action on the actor's role and tier.
//!     let ctx = PermissionContext::new(UserRole::Admin, SubscriptionTier::Pro);
//!     assert!(ctx.has_permission(Permission::InviteMembers));
//!
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

// Public module exports
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::{EntitlementsConfig, TierOverride, Validate};
pub use core::catalog::{RoleCatalog, TierCatalog};
pub use core::engine::EntitlementEngine;
pub use core::entitlements::LimitCheck;
pub use core::permissions::{
    TransitionDecision, assignable_roles, max_assignable_role, validate_role_transition,
};
pub use core::types::{
    CapabilityFlag, FeatureKey, FeatureLimits, Limit, LimitField, Permission, PermissionContext,
    RolePermissions, SubscriptionTier, UserRole,
};
pub use utils::error::{EntitlementError, Result};
