//! Permission checking methods

use tracing::debug;

use crate::core::catalog::RoleCatalog;
use crate::core::types::{Permission, PermissionContext, SubscriptionTier, UserRole};

impl PermissionContext {
    /// Whether the actor holds a permission.
    ///
    /// The free tier collapses the role system to an owner/everyone-else
    /// split: any non-owner on free tier is denied outright, whatever the
    /// role's nominal flags say. Role-based access control is a paid
    /// feature; this is product policy, not an oversight. On any other
    /// tier the answer is the role's flag.
    pub fn has_permission(&self, permission: Permission) -> bool {
        if self.subscription_tier == SubscriptionTier::Free && self.user_role != UserRole::Owner {
            debug!(
                role = %self.user_role,
                permission = %permission,
                "denied: free tier restricts permissions to the owner"
            );
            return false;
        }

        RoleCatalog::permissions(self.user_role).allows(permission)
    }

    /// Manage projects, or act on a project the actor owns.
    ///
    /// Project owners keep control of what they created regardless of
    /// role.
    pub fn can_manage_project(&self) -> bool {
        self.has_permission(Permission::ManageProjects) || self.is_project_owner
    }

    /// Manage tasks, or act on a task the actor created.
    pub fn can_manage_task(&self) -> bool {
        self.has_permission(Permission::ManageTasks) || self.is_task_creator
    }

    /// View usage analytics.
    ///
    /// Analytics is tier-gated on top of the role check: the free tier
    /// answers `false` even for the owner, who would pass the generic
    /// free-tier collapse.
    pub fn can_view_analytics(&self) -> bool {
        if self.subscription_tier == SubscriptionTier::Free {
            return false;
        }
        self.has_permission(Permission::ViewAnalytics)
    }

    /// Edit team name and profile
    pub fn can_manage_team(&self) -> bool {
        self.has_permission(Permission::ManageTeam)
    }

    /// Manage the subscription and payment method
    pub fn can_manage_billing(&self) -> bool {
        self.has_permission(Permission::ManageBilling)
    }

    /// Manage team membership records
    pub fn can_manage_members(&self) -> bool {
        self.has_permission(Permission::ManageMembers)
    }

    /// Invite new members
    pub fn can_invite_members(&self) -> bool {
        self.has_permission(Permission::InviteMembers)
    }

    /// Remove members
    pub fn can_remove_members(&self) -> bool {
        self.has_permission(Permission::RemoveMembers)
    }

    /// Change member roles
    pub fn can_change_roles(&self) -> bool {
        self.has_permission(Permission::ChangeRoles)
    }

    /// Delete the team
    pub fn can_delete_team(&self) -> bool {
        self.has_permission(Permission::DeleteTeam)
    }

    /// Manage team settings
    pub fn can_manage_settings(&self) -> bool {
        self.has_permission(Permission::ManageSettings)
    }
}
