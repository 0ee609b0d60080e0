//! Tests for permission evaluation and role transitions

#[cfg(test)]
mod tests {
    use crate::core::permissions::{
        assignable_roles, max_assignable_role, validate_role_transition,
    };
    use crate::core::types::{Permission, PermissionContext, SubscriptionTier, UserRole};

    fn ctx(role: UserRole, tier: SubscriptionTier) -> PermissionContext {
        PermissionContext::new(role, tier)
    }

    // ==================== has_permission ====================

    #[test]
    fn test_free_tier_collapse_denies_every_non_owner() {
        for role in [UserRole::Admin, UserRole::Member, UserRole::Viewer] {
            for permission in Permission::all() {
                assert!(
                    !ctx(role, SubscriptionTier::Free).has_permission(permission),
                    "{role} should be denied {permission} on free tier"
                );
            }
        }
    }

    #[test]
    fn test_free_tier_owner_keeps_role_flags() {
        let owner = ctx(UserRole::Owner, SubscriptionTier::Free);
        assert!(owner.has_permission(Permission::ManageTeam));
        assert!(owner.has_permission(Permission::ManageBilling));
        assert!(owner.has_permission(Permission::DeleteTeam));
    }

    #[test]
    fn test_paid_tier_uses_role_flags() {
        let admin = ctx(UserRole::Admin, SubscriptionTier::Starter);
        assert!(admin.has_permission(Permission::InviteMembers));
        assert!(!admin.has_permission(Permission::ManageBilling));

        let member = ctx(UserRole::Member, SubscriptionTier::Pro);
        assert!(member.has_permission(Permission::ManageTasks));
        assert!(!member.has_permission(Permission::RemoveMembers));

        let viewer = ctx(UserRole::Viewer, SubscriptionTier::Enterprise);
        assert!(!viewer.has_permission(Permission::ManageTasks));
    }

    // ==================== derived checks ====================

    #[test]
    fn test_project_owner_escape_hatch() {
        // A viewer holds no manage-projects flag, but owns this project.
        let viewer = ctx(UserRole::Viewer, SubscriptionTier::Pro).project_owner(true);
        assert!(!viewer.has_permission(Permission::ManageProjects));
        assert!(viewer.can_manage_project());

        let plain_viewer = ctx(UserRole::Viewer, SubscriptionTier::Pro);
        assert!(!plain_viewer.can_manage_project());
    }

    #[test]
    fn test_task_creator_escape_hatch() {
        let viewer = ctx(UserRole::Viewer, SubscriptionTier::Starter).task_creator(true);
        assert!(viewer.can_manage_task());
        assert!(!ctx(UserRole::Viewer, SubscriptionTier::Starter).can_manage_task());
    }

    #[test]
    fn test_escape_hatch_applies_on_free_tier_too() {
        // The collapse kills the role flag; ownership still wins.
        let member = ctx(UserRole::Member, SubscriptionTier::Free).project_owner(true);
        assert!(!member.has_permission(Permission::ManageProjects));
        assert!(member.can_manage_project());
    }

    #[test]
    fn test_analytics_double_gate_blocks_free_owner() {
        // The owner passes the generic collapse, yet analytics stays
        // tier-gated: deliberate product asymmetry.
        let owner = ctx(UserRole::Owner, SubscriptionTier::Free);
        assert!(owner.has_permission(Permission::ViewAnalytics));
        assert!(!owner.can_view_analytics());
    }

    #[test]
    fn test_analytics_on_paid_tiers_follows_role() {
        assert!(ctx(UserRole::Owner, SubscriptionTier::Starter).can_view_analytics());
        assert!(ctx(UserRole::Admin, SubscriptionTier::Pro).can_view_analytics());
        assert!(!ctx(UserRole::Member, SubscriptionTier::Pro).can_view_analytics());
        assert!(!ctx(UserRole::Viewer, SubscriptionTier::Enterprise).can_view_analytics());
    }

    #[test]
    fn test_direct_delegations_have_no_escape_hatch() {
        // Ownership facts do not leak into team/billing/member checks.
        let viewer = ctx(UserRole::Viewer, SubscriptionTier::Pro)
            .team_owner(true)
            .project_owner(true)
            .task_creator(true);
        assert!(!viewer.can_manage_team());
        assert!(!viewer.can_manage_billing());
        assert!(!viewer.can_manage_members());
        assert!(!viewer.can_invite_members());
        assert!(!viewer.can_remove_members());
        assert!(!viewer.can_change_roles());
        assert!(!viewer.can_delete_team());
        assert!(!viewer.can_manage_settings());
    }

    // ==================== role transitions ====================

    #[test]
    fn test_owner_role_never_changes() {
        for to in UserRole::all() {
            for actor in UserRole::all() {
                for tier in SubscriptionTier::all() {
                    let decision = validate_role_transition(UserRole::Owner, to, actor, tier);
                    assert!(!decision.valid);
                    assert_eq!(decision.reason, Some("Cannot change team owner role"));
                }
            }
        }
    }

    #[test]
    fn test_only_owner_assigns_ownership() {
        let decision = validate_role_transition(
            UserRole::Member,
            UserRole::Owner,
            UserRole::Admin,
            SubscriptionTier::Enterprise,
        );
        assert!(!decision.valid);
        assert_eq!(decision.reason, Some("Only team owner can assign ownership"));
    }

    #[test]
    fn test_admin_role_requires_paid_tier() {
        // Checked before actor authority: even the owner is blocked.
        let decision = validate_role_transition(
            UserRole::Member,
            UserRole::Admin,
            UserRole::Owner,
            SubscriptionTier::Free,
        );
        assert!(!decision.valid);
        assert_eq!(decision.reason, Some("Admin role requires paid subscription"));

        let decision = validate_role_transition(
            UserRole::Member,
            UserRole::Admin,
            UserRole::Owner,
            SubscriptionTier::Starter,
        );
        assert!(decision.valid);
        assert_eq!(decision.reason, None);
    }

    #[test]
    fn test_admin_reassigns_non_owner_roles() {
        let decision = validate_role_transition(
            UserRole::Viewer,
            UserRole::Member,
            UserRole::Admin,
            SubscriptionTier::Starter,
        );
        assert!(decision.valid);

        let decision = validate_role_transition(
            UserRole::Member,
            UserRole::Viewer,
            UserRole::Admin,
            SubscriptionTier::Free,
        );
        assert!(decision.valid);
    }

    #[test]
    fn test_member_cannot_promote() {
        let decision = validate_role_transition(
            UserRole::Viewer,
            UserRole::Member,
            UserRole::Member,
            SubscriptionTier::Pro,
        );
        assert!(!decision.valid);
        assert_eq!(decision.reason, Some("Insufficient permissions"));
    }

    #[test]
    fn test_viewer_cannot_change_roles() {
        let decision = validate_role_transition(
            UserRole::Member,
            UserRole::Viewer,
            UserRole::Viewer,
            SubscriptionTier::Enterprise,
        );
        assert!(!decision.valid);
        assert_eq!(decision.reason, Some("Insufficient permissions"));
    }

    #[test]
    fn test_owner_may_hand_over_ownership_target() {
        // Moving a member *to* owner is permitted for the owner; changing
        // the current owner's own role is what stays locked.
        let decision = validate_role_transition(
            UserRole::Admin,
            UserRole::Owner,
            UserRole::Owner,
            SubscriptionTier::Pro,
        );
        assert!(decision.valid);
    }

    #[test]
    fn test_decision_wire_shape() {
        let rejected = validate_role_transition(
            UserRole::Owner,
            UserRole::Member,
            UserRole::Owner,
            SubscriptionTier::Pro,
        );
        let json = serde_json::to_value(rejected).unwrap();
        assert_eq!(json["valid"], serde_json::json!(false));
        assert_eq!(json["reason"], serde_json::json!("Cannot change team owner role"));

        let valid = validate_role_transition(
            UserRole::Viewer,
            UserRole::Member,
            UserRole::Owner,
            SubscriptionTier::Pro,
        );
        let json = serde_json::to_value(valid).unwrap();
        assert_eq!(json["valid"], serde_json::json!(true));
        assert!(json.get("reason").is_none());
    }

    // ==================== assignable roles ====================

    #[test]
    fn test_max_assignable_role_per_tier() {
        assert_eq!(max_assignable_role(SubscriptionTier::Free), UserRole::Member);
        assert_eq!(max_assignable_role(SubscriptionTier::Starter), UserRole::Admin);
        assert_eq!(max_assignable_role(SubscriptionTier::Pro), UserRole::Admin);
        assert_eq!(
            max_assignable_role(SubscriptionTier::Enterprise),
            UserRole::Admin
        );
    }

    #[test]
    fn test_assignable_roles_for_owner() {
        assert_eq!(
            assignable_roles(UserRole::Owner, SubscriptionTier::Pro),
            vec![UserRole::Owner, UserRole::Admin, UserRole::Member, UserRole::Viewer]
        );
        // Free tier drops admin; ownership assignment is not tier-gated.
        assert_eq!(
            assignable_roles(UserRole::Owner, SubscriptionTier::Free),
            vec![UserRole::Owner, UserRole::Member, UserRole::Viewer]
        );
    }

    #[test]
    fn test_assignable_roles_for_admin() {
        assert_eq!(
            assignable_roles(UserRole::Admin, SubscriptionTier::Free),
            vec![UserRole::Member, UserRole::Viewer]
        );
        assert_eq!(
            assignable_roles(UserRole::Admin, SubscriptionTier::Starter),
            vec![UserRole::Admin, UserRole::Member, UserRole::Viewer]
        );
    }

    #[test]
    fn test_assignable_roles_for_non_managers_is_empty() {
        assert!(assignable_roles(UserRole::Member, SubscriptionTier::Pro).is_empty());
        assert!(assignable_roles(UserRole::Viewer, SubscriptionTier::Enterprise).is_empty());
    }
}
