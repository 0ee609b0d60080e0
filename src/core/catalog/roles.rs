//! Role catalog: per-role permission records

use crate::core::types::{RolePermissions, UserRole};

const OWNER: RolePermissions = RolePermissions {
    can_manage_team: true,
    can_manage_projects: true,
    can_manage_tasks: true,
    can_manage_members: true,
    can_view_analytics: true,
    can_manage_billing: true,
    can_delete_team: true,
    can_invite_members: true,
    can_remove_members: true,
    can_change_roles: true,
    can_manage_settings: true,
};

// Admins run the team day to day; billing and team deletion stay with the
// owner.
const ADMIN: RolePermissions = RolePermissions {
    can_manage_team: true,
    can_manage_projects: true,
    can_manage_tasks: true,
    can_manage_members: true,
    can_view_analytics: true,
    can_manage_billing: false,
    can_delete_team: false,
    can_invite_members: true,
    can_remove_members: true,
    can_change_roles: true,
    can_manage_settings: true,
};

const MEMBER: RolePermissions = RolePermissions {
    can_manage_team: false,
    can_manage_projects: true,
    can_manage_tasks: true,
    can_manage_members: false,
    can_view_analytics: false,
    can_manage_billing: false,
    can_delete_team: false,
    can_invite_members: false,
    can_remove_members: false,
    can_change_roles: false,
    can_manage_settings: false,
};

const VIEWER: RolePermissions = RolePermissions {
    can_manage_team: false,
    can_manage_projects: false,
    can_manage_tasks: false,
    can_manage_members: false,
    can_view_analytics: false,
    can_manage_billing: false,
    can_delete_team: false,
    can_invite_members: false,
    can_remove_members: false,
    can_change_roles: false,
    can_manage_settings: false,
};

/// Role catalog: the role → [`RolePermissions`] table.
///
/// A fixed process-wide constant; roles are not configurable per
/// deployment.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleCatalog;

impl RoleCatalog {
    /// Permission record for a role. Total: every role has a record.
    pub fn permissions(role: UserRole) -> &'static RolePermissions {
        match role {
            UserRole::Owner => &OWNER,
            UserRole::Admin => &ADMIN,
            UserRole::Member => &MEMBER,
            UserRole::Viewer => &VIEWER,
        }
    }
}
