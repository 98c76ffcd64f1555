//! Context construction.
//!
//! The builder turns a membership and its fetched policy list into the
//! aggregate the rest of the engine evaluates against: effective
//! permissions plus the restriction list materialized from enforced
//! policies. Building is pure; installing the result into a store is the
//! session's concern, so a failed build can never leave partial state
//! behind.

use crate::error::{EngineError, Result};
use orgpolicy_types::{
    OrganizationContext, OrganizationId, OrganizationMembership, OrganizationPolicy,
    OrganizationPreferences, PolicyRule, SettingRestriction,
};
use tracing::debug;

/// Select the membership a context should be built for.
///
/// With an organization id, the membership for that exact organization;
/// without one, the membership flagged as the user's default. Either
/// lookup failing is a [`EngineError::MembershipNotFound`].
pub fn select_membership<'a>(
    memberships: &'a [OrganizationMembership],
    organization_id: Option<&OrganizationId>,
) -> Result<&'a OrganizationMembership> {
    let found = match organization_id {
        Some(id) => memberships.iter().find(|m| &m.organization_id == id),
        None => memberships.iter().find(|m| m.is_default),
    };

    found.ok_or_else(|| EngineError::MembershipNotFound {
        organization_id: organization_id.cloned(),
    })
}

/// Build the aggregate context for one membership.
///
/// Restrictions are materialized from enforced policies only: a security
/// policy requiring MFA locks `mfaEnabled`, a verification policy
/// forbidding auto-sharing locks `verification.autoShare`. Effective
/// permissions are currently a direct copy of the membership's grants;
/// narrowing them through policies is an extension point, not a bug.
pub fn build_context(
    membership: OrganizationMembership,
    policies: Vec<OrganizationPolicy>,
    preferences: Option<OrganizationPreferences>,
) -> OrganizationContext {
    let restrictions = materialize_restrictions(&policies);

    debug!(
        organization = %membership.organization_id,
        policies = policies.len(),
        restrictions = restrictions.len(),
        "built organization context"
    );

    OrganizationContext {
        effective_permissions: membership.permissions.clone(),
        membership,
        policies,
        restrictions,
        preferences,
    }
}

/// Flatten enforced policies into path-specific restrictions.
///
/// Each arm pairs a policy-kind predicate with the restriction it emits;
/// new restriction rules follow the same pattern.
fn materialize_restrictions(policies: &[OrganizationPolicy]) -> Vec<SettingRestriction> {
    let mut restrictions = Vec::new();

    for policy in policies.iter().filter(|p| p.enforced) {
        match &policy.rule {
            PolicyRule::Security(settings) if settings.require_mfa => {
                restrictions.push(SettingRestriction::locked(
                    "mfaEnabled",
                    "Multi-factor authentication is required by your organization",
                    policy.id.clone(),
                    policy.name.clone(),
                ));
            }
            PolicyRule::Verification(settings) if !settings.allow_auto_sharing => {
                restrictions.push(SettingRestriction::locked(
                    "verification.autoShare",
                    "Automatic sharing of verification results is disabled by your organization",
                    policy.id.clone(),
                    policy.name.clone(),
                ));
            }
            PolicyRule::Security(_)
            | PolicyRule::Verification(_)
            | PolicyRule::Notification(_)
            | PolicyRule::DataRetention(_)
            | PolicyRule::ApiAccess(_) => {}
        }
    }

    restrictions
}
