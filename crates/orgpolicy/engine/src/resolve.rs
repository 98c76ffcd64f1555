//! Effective value resolution.
//!
//! The resolver computes the value a setting must take once policy
//! overrides apply. The UI uses it to display locked values; the save
//! path uses it to silently coerce a submission toward compliance.
//! Override rules mirror the validator's rule set, so a forced value
//! always validates.

use orgpolicy_types::{OrganizationContext, PolicyRule, SettingPath};
use serde_json::Value;
use tracing::debug;

/// Resolve the effective value for one setting.
///
/// With no context the user's value passes through unchanged. Otherwise
/// enforced policies are walked in fetch order and the first one defining
/// an override for the path wins, even when it differs from the user's
/// value.
pub fn effective_setting_value(
    context: Option<&OrganizationContext>,
    path: &SettingPath,
    user_value: Value,
) -> Value {
    let Some(context) = context else {
        return user_value;
    };

    for policy in context.enforced_policies() {
        if let Some(forced) = policy_override(&policy.rule, path) {
            if forced != user_value {
                debug!(%path, policy = %policy.id, "user value overridden by policy");
            }
            return forced;
        }
    }

    user_value
}

/// The override a rule defines for a path, if any.
///
/// Exhaustive over [`PolicyRule`]; kinds without overrides in the
/// reference behavior return `None` explicitly. Shared with validation so
/// a mandated value is never rejected by the restriction that mandates it.
pub(crate) fn policy_override(rule: &PolicyRule, path: &SettingPath) -> Option<Value> {
    match rule {
        PolicyRule::Security(settings) => {
            (path.as_str() == "mfaEnabled" && settings.require_mfa).then(|| Value::Bool(true))
        }
        PolicyRule::Verification(settings) => (path.as_str() == "verification.autoShare"
            && !settings.allow_auto_sharing)
            .then(|| Value::Bool(false)),
        PolicyRule::Notification(_) | PolicyRule::DataRetention(_) | PolicyRule::ApiAccess(_) => {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_context;
    use orgpolicy_types::{
        OrganizationMembership, OrganizationPolicy, OrganizationRole, SecuritySettings,
        VerificationSettings,
    };
    use serde_json::json;

    fn ctx(policies: Vec<OrganizationPolicy>) -> OrganizationContext {
        let membership =
            OrganizationMembership::new("org-1", "Acme Corp", OrganizationRole::Member);
        build_context(membership, policies, None)
    }

    #[test]
    fn missing_context_passes_value_through() {
        let path = SettingPath::from("mfaEnabled");
        assert_eq!(effective_setting_value(None, &path, json!(false)), json!(false));
    }

    #[test]
    fn mfa_is_forced_on_when_required() {
        let ctx = ctx(vec![OrganizationPolicy::new(
            "pol-1",
            "Require MFA",
            PolicyRule::Security(SecuritySettings { require_mfa: true }),
        )]);

        let effective =
            effective_setting_value(Some(&ctx), &SettingPath::from("mfaEnabled"), json!(false));
        assert_eq!(effective, json!(true));
    }

    #[test]
    fn auto_share_is_forced_off_when_forbidden() {
        let ctx = ctx(vec![OrganizationPolicy::new(
            "pol-2",
            "No auto-sharing",
            PolicyRule::Verification(VerificationSettings {
                allow_auto_sharing: false,
            }),
        )]);

        let effective = effective_setting_value(
            Some(&ctx),
            &SettingPath::from("verification.autoShare"),
            json!(true),
        );
        assert_eq!(effective, json!(false));
    }

    #[test]
    fn first_override_in_fetch_order_wins() {
        // Both policies define an override for mfaEnabled; the permissive
        // one sits first but defines none, so the enforcing one applies.
        let ctx = ctx(vec![
            OrganizationPolicy::new(
                "pol-0",
                "MFA optional",
                PolicyRule::Security(SecuritySettings { require_mfa: false }),
            ),
            OrganizationPolicy::new(
                "pol-1",
                "Require MFA",
                PolicyRule::Security(SecuritySettings { require_mfa: true }),
            ),
        ]);

        let effective =
            effective_setting_value(Some(&ctx), &SettingPath::from("mfaEnabled"), json!(false));
        assert_eq!(effective, json!(true));
    }

    #[test]
    fn unenforced_policies_define_no_override() {
        let ctx = ctx(vec![OrganizationPolicy::new(
            "pol-1",
            "Require MFA",
            PolicyRule::Security(SecuritySettings { require_mfa: true }),
        )
        .advisory()]);

        let effective =
            effective_setting_value(Some(&ctx), &SettingPath::from("mfaEnabled"), json!(false));
        assert_eq!(effective, json!(false));
    }

    #[test]
    fn unmatched_paths_pass_through() {
        let ctx = ctx(vec![OrganizationPolicy::new(
            "pol-1",
            "Require MFA",
            PolicyRule::Security(SecuritySettings { require_mfa: true }),
        )]);

        let effective = effective_setting_value(
            Some(&ctx),
            &SettingPath::from("theme"),
            json!("dark"),
        );
        assert_eq!(effective, json!("dark"));
    }

    #[test]
    fn resolution_is_a_fixed_point() {
        let ctx = ctx(vec![OrganizationPolicy::new(
            "pol-1",
            "Require MFA",
            PolicyRule::Security(SecuritySettings { require_mfa: true }),
        )]);
        let path = SettingPath::from("mfaEnabled");

        let once = effective_setting_value(Some(&ctx), &path, json!(false));
        let twice = effective_setting_value(Some(&ctx), &path, once.clone());
        assert_eq!(once, twice);
    }
}
