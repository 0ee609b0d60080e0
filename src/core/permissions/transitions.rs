//! Role transition validation

use serde::Serialize;
use tracing::debug;

use crate::core::types::{SubscriptionTier, UserRole};

/// Stable, user-facing rejection reasons. The UI displays these verbatim.
pub(crate) mod reasons {
    pub const OWNER_ROLE_PROTECTED: &str = "Cannot change team owner role";
    pub const OWNER_ASSIGNS_OWNERSHIP: &str = "Only team owner can assign ownership";
    pub const ADMIN_REQUIRES_PAID: &str = "Admin role requires paid subscription";
    pub const INSUFFICIENT_PERMISSIONS: &str = "Insufficient permissions";
}

/// Outcome of a role transition check.
///
/// A rejection is a normal control-flow value, not an error: handlers
/// translate it into a permission-denied or upgrade prompt.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TransitionDecision {
    /// Whether the transition may proceed
    pub valid: bool,
    /// User-facing rejection reason, absent when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl TransitionDecision {
    fn allowed() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    fn rejected(reason: &'static str) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }
}

/// The highest role a tier allows assigning.
///
/// Free accounts stop at member; any paid tier unlocks admin. Owner is
/// never assignable through transitions regardless of tier.
pub fn max_assignable_role(tier: SubscriptionTier) -> UserRole {
    if tier.is_paid() {
        UserRole::Admin
    } else {
        UserRole::Member
    }
}

/// Validate a role change on a team member.
///
/// Rules apply strictly in order:
///
/// 1. The owner role never changes here; ownership transfer is a separate
///    flow.
/// 2. Only the owner hands out ownership.
/// 3. The admin role needs a paid tier; this vetoes even the owner on a
///    free account.
/// 4. Admins may reassign any non-owner role.
/// 5. So may the owner.
/// 6. Everyone else is denied.
pub fn validate_role_transition(
    from_role: UserRole,
    to_role: UserRole,
    actor_role: UserRole,
    tier: SubscriptionTier,
) -> TransitionDecision {
    if from_role == UserRole::Owner {
        return rejected_with_log(from_role, to_role, actor_role, reasons::OWNER_ROLE_PROTECTED);
    }

    if to_role == UserRole::Owner && actor_role != UserRole::Owner {
        return rejected_with_log(
            from_role,
            to_role,
            actor_role,
            reasons::OWNER_ASSIGNS_OWNERSHIP,
        );
    }

    if to_role == UserRole::Admin && max_assignable_role(tier) != UserRole::Admin {
        return rejected_with_log(from_role, to_role, actor_role, reasons::ADMIN_REQUIRES_PAID);
    }

    if actor_role == UserRole::Admin || actor_role == UserRole::Owner {
        return TransitionDecision::allowed();
    }

    rejected_with_log(
        from_role,
        to_role,
        actor_role,
        reasons::INSUFFICIENT_PERMISSIONS,
    )
}

/// The roles an actor may assign on the given tier.
///
/// Drives member-role pickers in the UI; derived from the same rules as
/// [`validate_role_transition`], so a listed role is always a valid
/// target for a non-owner member.
pub fn assignable_roles(actor_role: UserRole, tier: SubscriptionTier) -> Vec<UserRole> {
    // A viewer stands in for the member being edited: any non-owner
    // from-role yields the same answer.
    UserRole::all()
        .into_iter()
        .filter(|to| validate_role_transition(UserRole::Viewer, *to, actor_role, tier).valid)
        .collect()
}

fn rejected_with_log(
    from_role: UserRole,
    to_role: UserRole,
    actor_role: UserRole,
    reason: &'static str,
) -> TransitionDecision {
    debug!(
        from = %from_role,
        to = %to_role,
        actor = %actor_role,
        reason,
        "role transition rejected"
    );
    TransitionDecision::rejected(reason)
}
