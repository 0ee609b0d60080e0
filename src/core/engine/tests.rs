//! Tests for the engine facade

#[cfg(test)]
mod tests {
    use crate::config::{EntitlementsConfig, TierOverride};
    use crate::core::engine::EntitlementEngine;
    use crate::core::types::{
        CapabilityFlag, FeatureKey, LimitField, Permission, PermissionContext, SubscriptionTier,
        UserRole,
    };

    #[test]
    fn test_engine_defaults_match_builtin_catalog() {
        let engine = EntitlementEngine::new();
        assert_eq!(
            engine.limits(SubscriptionTier::Free).max_projects.value(),
            Some(3)
        );
        assert!(
            engine
                .can_access_feature(
                    SubscriptionTier::Pro,
                    FeatureKey::Capability(CapabilityFlag::ApiAccess),
                )
                .unwrap()
        );
    }

    #[test]
    fn test_engine_with_config_override() {
        let mut config = EntitlementsConfig::default();
        config.tiers.pro = Some(TierOverride {
            max_projects: Some(75),
            ..TierOverride::default()
        });
        let engine = EntitlementEngine::with_config(&config).unwrap();

        let check = engine
            .check_limit(SubscriptionTier::Pro, LimitField::MaxProjects, 74)
            .unwrap();
        assert!(check.allowed);
        assert_eq!(check.remaining, Some(1));
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let mut config = EntitlementsConfig::default();
        config.tiers.starter = Some(TierOverride {
            max_teams: Some(0),
            ..TierOverride::default()
        });
        assert!(EntitlementEngine::with_config(&config).is_err());
    }

    #[test]
    fn test_engine_delegates_permission_checks() {
        let engine = EntitlementEngine::new();
        let ctx = PermissionContext::new(UserRole::Member, SubscriptionTier::Free);
        assert!(!engine.has_permission(&ctx, Permission::ManageTasks));

        let ctx = PermissionContext::new(UserRole::Member, SubscriptionTier::Starter);
        assert!(engine.has_permission(&ctx, Permission::ManageTasks));
    }

    #[test]
    fn test_engine_delegates_transitions() {
        let engine = EntitlementEngine::new();
        let decision = engine.validate_role_transition(
            UserRole::Viewer,
            UserRole::Member,
            UserRole::Admin,
            SubscriptionTier::Starter,
        );
        assert!(decision.valid);

        assert_eq!(
            engine.max_assignable_role(SubscriptionTier::Free),
            UserRole::Member
        );
        assert_eq!(
            engine.assignable_roles(UserRole::Admin, SubscriptionTier::Free),
            vec![UserRole::Member, UserRole::Viewer]
        );
    }

    #[test]
    fn test_engine_role_permissions_lookup() {
        let engine = EntitlementEngine::new();
        assert!(
            engine
                .role_permissions(UserRole::Owner)
                .allows(Permission::ManageBilling)
        );
        assert!(
            !engine
                .role_permissions(UserRole::Admin)
                .allows(Permission::ManageBilling)
        );
    }
}
