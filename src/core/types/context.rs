//! Request-scoped permission context

use serde::{Deserialize, Serialize};

use super::role::UserRole;
use super::tier::SubscriptionTier;

/// Everything a permission check needs to know about the actor.
///
/// Built fresh per authorization check from a consistent snapshot of
/// upstream storage reads (role and tier read within the same request, so
/// an upgrade mid-flight cannot produce a torn view). Never persisted and
/// never shared across requests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionContext {
    /// The actor's role in the team being acted on
    pub user_role: UserRole,
    /// The account's subscription tier
    pub subscription_tier: SubscriptionTier,
    /// Whether the actor owns the team
    #[serde(default)]
    pub is_team_owner: bool,
    /// Whether the actor owns the project being acted on
    #[serde(default)]
    pub is_project_owner: bool,
    /// Whether the actor created the task being acted on
    #[serde(default)]
    pub is_task_creator: bool,
}

impl PermissionContext {
    /// Context with all ownership facts false
    pub fn new(user_role: UserRole, subscription_tier: SubscriptionTier) -> Self {
        Self {
            user_role,
            subscription_tier,
            is_team_owner: false,
            is_project_owner: false,
            is_task_creator: false,
        }
    }

    /// Set the team ownership fact
    pub fn team_owner(mut self, is_team_owner: bool) -> Self {
        self.is_team_owner = is_team_owner;
        self
    }

    /// Set the project ownership fact
    pub fn project_owner(mut self, is_project_owner: bool) -> Self {
        self.is_project_owner = is_project_owner;
        self
    }

    /// Set the task authorship fact
    pub fn task_creator(mut self, is_task_creator: bool) -> Self {
        self.is_task_creator = is_task_creator;
        self
    }
}
