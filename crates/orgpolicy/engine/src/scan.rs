//! Violation scanning.
//!
//! Unlike single-field validation, the scanner inspects a full settings
//! snapshot for policies that are violated right now. It backs the
//! compliance dashboard, not form gating, so it accumulates every
//! violation instead of stopping at the first.

use crate::decision::Violation;
use orgpolicy_types::{
    lookup_path, value_is_truthy, OrganizationContext, OrganizationPolicy, PolicyRule,
    SettingPath,
};
use serde_json::Value;
use tracing::debug;

/// Scan a settings snapshot for policies it currently violates.
///
/// With no context the snapshot cannot violate anything (fail-open).
pub fn policy_violations(
    context: Option<&OrganizationContext>,
    snapshot: &Value,
) -> Vec<Violation> {
    let Some(context) = context else {
        return Vec::new();
    };

    let mut violations = Vec::new();
    for policy in context.enforced_policies() {
        check_policy(policy, snapshot, &mut violations);
    }

    if !violations.is_empty() {
        debug!(count = violations.len(), "settings snapshot violates policy");
    }

    violations
}

/// Check one policy's invariant against the snapshot.
///
/// Exhaustive over [`PolicyRule`]; kinds with no snapshot invariant in
/// the reference behavior contribute nothing.
fn check_policy(policy: &OrganizationPolicy, snapshot: &Value, out: &mut Vec<Violation>) {
    match &policy.rule {
        PolicyRule::Security(settings) => {
            if settings.require_mfa {
                let path = SettingPath::from("mfaEnabled");
                let enabled = lookup_path(snapshot, &path)
                    .map(value_is_truthy)
                    .unwrap_or(false);
                if !enabled {
                    out.push(Violation {
                        setting: path,
                        violation: "Multi-factor authentication is required but not enabled"
                            .to_string(),
                        policy_id: policy.id.clone(),
                        policy_name: policy.name.clone(),
                    });
                }
            }
        }
        PolicyRule::Verification(settings) => {
            if !settings.allow_auto_sharing {
                let path = SettingPath::from("verification.autoShare");
                let sharing = lookup_path(snapshot, &path)
                    .map(|v| v == &Value::Bool(true))
                    .unwrap_or(false);
                if sharing {
                    out.push(Violation {
                        setting: path,
                        violation:
                            "Automatic sharing of verification results is enabled but forbidden"
                                .to_string(),
                        policy_id: policy.id.clone(),
                        policy_name: policy.name.clone(),
                    });
                }
            }
        }
        PolicyRule::Notification(_) | PolicyRule::DataRetention(_) | PolicyRule::ApiAccess(_) => {}
    }
}
