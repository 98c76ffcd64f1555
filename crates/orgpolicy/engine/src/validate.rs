//! Single-field validation.
//!
//! Validation runs on every form edit, synchronously against the current
//! context snapshot. Restrictions are checked first and short-circuit
//! when non-overridable; per-kind rules then run over enforced policies
//! in fetch order until one denies.

use crate::decision::ValidationDecision;
use orgpolicy_types::{
    value_is_truthy, OrganizationContext, OrganizationPolicy, PolicyRule, SettingPath,
};
use serde_json::Value;
use tracing::debug;

/// Validate a proposed change to one setting.
///
/// With no context, every candidate is valid (fail-open): absence of
/// policy data is not a restriction signal.
pub fn validate_setting_change(
    context: Option<&OrganizationContext>,
    path: &SettingPath,
    candidate: &Value,
) -> ValidationDecision {
    let Some(context) = context else {
        return ValidationDecision::allow();
    };

    // Restrictions beat per-kind rules and end evaluation outright. The
    // one candidate a locked path accepts is the value an enforced policy
    // mandates for it, which keeps validation consistent with resolution.
    if let Some(restriction) = context.restriction_for(path) {
        if !restriction.can_override && !candidate_matches_mandate(context, path, candidate) {
            debug!(%path, policy = %restriction.policy_id, "change blocked by restriction");
            return ValidationDecision::deny(
                restriction.reason.clone(),
                restriction.policy_id.clone(),
            );
        }
    }

    for policy in context.enforced_policies() {
        let decision = validate_against_policy(policy, path, candidate);
        if !decision.is_valid() {
            debug!(%path, policy = %policy.id, kind = %policy.kind(), "change rejected by policy");
            return decision;
        }
    }

    ValidationDecision::allow()
}

/// Whether the candidate equals the value some enforced policy mandates
/// for the path. First defined override wins, mirroring resolution order.
fn candidate_matches_mandate(
    context: &OrganizationContext,
    path: &SettingPath,
    candidate: &Value,
) -> bool {
    context
        .enforced_policies()
        .find_map(|policy| crate::resolve::policy_override(&policy.rule, path))
        .is_some_and(|mandated| &mandated == candidate)
}

/// Per-kind rule dispatch for one policy.
///
/// The match is exhaustive over [`PolicyRule`]; kinds with no validation
/// rules in the reference behavior carry explicit allow arms so a new
/// kind cannot land without a decision here.
fn validate_against_policy(
    policy: &OrganizationPolicy,
    path: &SettingPath,
    candidate: &Value,
) -> ValidationDecision {
    match &policy.rule {
        PolicyRule::Security(settings) => {
            if path.as_str() == "mfaEnabled"
                && settings.require_mfa
                && !value_is_truthy(candidate)
            {
                return ValidationDecision::deny(
                    format!(
                        "Multi-factor authentication cannot be disabled: required by policy \"{}\"",
                        policy.name
                    ),
                    policy.id.clone(),
                );
            }
            ValidationDecision::allow()
        }
        PolicyRule::Verification(settings) => {
            if path.as_str() == "verification.autoShare"
                && !settings.allow_auto_sharing
                && candidate == &Value::Bool(true)
            {
                return ValidationDecision::deny(
                    format!(
                        "Automatic sharing cannot be enabled: forbidden by policy \"{}\"",
                        policy.name
                    ),
                    policy.id.clone(),
                );
            }
            ValidationDecision::allow()
        }
        // No validation rules in the reference behavior for these kinds.
        PolicyRule::Notification(_) | PolicyRule::DataRetention(_) | PolicyRule::ApiAccess(_) => {
            ValidationDecision::allow()
        }
    }
}
