//! Team role and permission definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::EntitlementError;

/// A member's role within a team.
///
/// Exactly one `Owner` exists per team; the owner role is protected and
/// only leaves a team via deletion or ownership transfer, both of which
/// happen upstream. Roles carry no a priori order for transition purposes:
/// who may move whom is decided by actor authority, not role distance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Team owner
    Owner,
    /// Team administrator
    Admin,
    /// Regular member
    Member,
    /// Read-only member
    Viewer,
}

impl UserRole {
    /// All roles
    pub fn all() -> [UserRole; 4] {
        [Self::Owner, Self::Admin, Self::Member, Self::Viewer]
    }

    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Viewer => "viewer",
        }
    }
}

impl FromStr for UserRole {
    type Err = EntitlementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            "viewer" => Ok(Self::Viewer),
            other => Err(EntitlementError::unknown_key(format!("user role '{other}'"))),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A team-scoped action gated by role.
///
/// Wire names keep the document schema's `canXxx` spelling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Edit team name and profile
    #[serde(rename = "canManageTeam")]
    ManageTeam,
    /// Create, edit, and archive projects
    #[serde(rename = "canManageProjects")]
    ManageProjects,
    /// Create, edit, and close tasks
    #[serde(rename = "canManageTasks")]
    ManageTasks,
    /// Manage team membership records
    #[serde(rename = "canManageMembers")]
    ManageMembers,
    /// View usage analytics
    #[serde(rename = "canViewAnalytics")]
    ViewAnalytics,
    /// Manage the subscription and payment method
    #[serde(rename = "canManageBilling")]
    ManageBilling,
    /// Delete the team
    #[serde(rename = "canDeleteTeam")]
    DeleteTeam,
    /// Invite new members
    #[serde(rename = "canInviteMembers")]
    InviteMembers,
    /// Remove members
    #[serde(rename = "canRemoveMembers")]
    RemoveMembers,
    /// Change member roles
    #[serde(rename = "canChangeRoles")]
    ChangeRoles,
    /// Manage team settings
    #[serde(rename = "canManageSettings")]
    ManageSettings,
}

impl Permission {
    /// All permissions
    pub fn all() -> [Permission; 11] {
        [
            Self::ManageTeam,
            Self::ManageProjects,
            Self::ManageTasks,
            Self::ManageMembers,
            Self::ViewAnalytics,
            Self::ManageBilling,
            Self::DeleteTeam,
            Self::InviteMembers,
            Self::RemoveMembers,
            Self::ChangeRoles,
            Self::ManageSettings,
        ]
    }

    /// Wire name of the permission
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageTeam => "canManageTeam",
            Self::ManageProjects => "canManageProjects",
            Self::ManageTasks => "canManageTasks",
            Self::ManageMembers => "canManageMembers",
            Self::ViewAnalytics => "canViewAnalytics",
            Self::ManageBilling => "canManageBilling",
            Self::DeleteTeam => "canDeleteTeam",
            Self::InviteMembers => "canInviteMembers",
            Self::RemoveMembers => "canRemoveMembers",
            Self::ChangeRoles => "canChangeRoles",
            Self::ManageSettings => "canManageSettings",
        }
    }
}

impl FromStr for Permission {
    type Err = EntitlementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "canManageTeam" => Ok(Self::ManageTeam),
            "canManageProjects" => Ok(Self::ManageProjects),
            "canManageTasks" => Ok(Self::ManageTasks),
            "canManageMembers" => Ok(Self::ManageMembers),
            "canViewAnalytics" => Ok(Self::ViewAnalytics),
            "canManageBilling" => Ok(Self::ManageBilling),
            "canDeleteTeam" => Ok(Self::DeleteTeam),
            "canInviteMembers" => Ok(Self::InviteMembers),
            "canRemoveMembers" => Ok(Self::RemoveMembers),
            "canChangeRoles" => Ok(Self::ChangeRoles),
            "canManageSettings" => Ok(Self::ManageSettings),
            other => Err(EntitlementError::unknown_key(format!(
                "permission '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action flags granted by a role.
///
/// One record per role lives in the role catalog; lookups go through
/// [`RolePermissions::allows`] so every permission name is resolved by an
/// exhaustive match rather than a dynamic field read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RolePermissions {
    /// Edit team name and profile
    pub can_manage_team: bool,
    /// Create, edit, and archive projects
    pub can_manage_projects: bool,
    /// Create, edit, and close tasks
    pub can_manage_tasks: bool,
    /// Manage team membership records
    pub can_manage_members: bool,
    /// View usage analytics
    pub can_view_analytics: bool,
    /// Manage the subscription and payment method
    pub can_manage_billing: bool,
    /// Delete the team
    pub can_delete_team: bool,
    /// Invite new members
    pub can_invite_members: bool,
    /// Remove members
    pub can_remove_members: bool,
    /// Change member roles
    pub can_change_roles: bool,
    /// Manage team settings
    pub can_manage_settings: bool,
}

impl RolePermissions {
    /// Whether this record grants the given permission
    pub fn allows(&self, permission: Permission) -> bool {
        match permission {
            Permission::ManageTeam => self.can_manage_team,
            Permission::ManageProjects => self.can_manage_projects,
            Permission::ManageTasks => self.can_manage_tasks,
            Permission::ManageMembers => self.can_manage_members,
            Permission::ViewAnalytics => self.can_view_analytics,
            Permission::ManageBilling => self.can_manage_billing,
            Permission::DeleteTeam => self.can_delete_team,
            Permission::InviteMembers => self.can_invite_members,
            Permission::RemoveMembers => self.can_remove_members,
            Permission::ChangeRoles => self.can_change_roles,
            Permission::ManageSettings => self.can_manage_settings,
        }
    }
}
