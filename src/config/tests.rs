//! Tests for configuration loading and validation

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::config::{EntitlementsConfig, TierOverride, Validate};
    use crate::core::types::SubscriptionTier;
    use crate::utils::error::EntitlementError;

    #[test]
    fn test_default_config_has_no_overrides() {
        let config = EntitlementsConfig::default();
        for tier in SubscriptionTier::all() {
            assert!(config.tier_override(tier).is_none());
        }
        config.validate().unwrap();
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
tiers:
  pro:
    maxProjects: 75
    maxFileUploadMB: 500
  enterprise:
    maxTeams: -1
"#;
        let config: EntitlementsConfig = serde_yaml::from_str(yaml).unwrap();
        let pro = config.tier_override(SubscriptionTier::Pro).unwrap();
        assert_eq!(pro.max_projects, Some(75));
        assert_eq!(pro.max_file_upload_mb, Some(500));
        assert_eq!(pro.max_teams, None);
        let enterprise = config.tier_override(SubscriptionTier::Enterprise).unwrap();
        assert_eq!(enterprise.max_teams, Some(-1));
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let yaml = r#"
tiers:
  pro:
    maxWidgets: 9
"#;
        assert!(serde_yaml::from_str::<EntitlementsConfig>(yaml).is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tiers:\n  starter:\n    maxTeams: 5").unwrap();

        let config = EntitlementsConfig::from_file(file.path()).unwrap();
        let starter = config.tier_override(SubscriptionTier::Starter).unwrap();
        assert_eq!(starter.max_teams, Some(5));
    }

    #[test]
    fn test_config_from_missing_file() {
        let err = EntitlementsConfig::from_file("/nonexistent/entitlements.yaml").unwrap_err();
        assert!(matches!(err, EntitlementError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_sub_sentinel_cap() {
        let mut config = EntitlementsConfig::default();
        config.tiers.free = Some(TierOverride {
            max_projects: Some(-2),
            ..TierOverride::default()
        });
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EntitlementError::Config(_)));
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = EntitlementsConfig::default();
        base.tiers.pro = Some(TierOverride {
            max_projects: Some(60),
            ..TierOverride::default()
        });
        let mut layered = EntitlementsConfig::default();
        layered.tiers.pro = Some(TierOverride {
            max_projects: Some(80),
            ..TierOverride::default()
        });
        layered.tiers.free = Some(TierOverride {
            max_teams: Some(2),
            ..TierOverride::default()
        });

        let merged = base.merge(layered);
        assert_eq!(
            merged
                .tier_override(SubscriptionTier::Pro)
                .unwrap()
                .max_projects,
            Some(80)
        );
        assert_eq!(
            merged
                .tier_override(SubscriptionTier::Free)
                .unwrap()
                .max_teams,
            Some(2)
        );
    }
}
