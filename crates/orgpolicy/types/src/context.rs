//! The organization context aggregate.
//!
//! Exactly one context is current at a time. It is built once per
//! organization switch, replaced wholesale, and never mutated in place,
//! so readers always see a complete aggregate.

use crate::membership::OrganizationMembership;
use crate::policy::OrganizationPolicy;
use crate::preferences::OrganizationPreferences;
use crate::restriction::SettingRestriction;
use crate::setting::SettingPath;
use serde::{Deserialize, Serialize};

/// Aggregate of a user's current membership, the organization's policies,
/// and the restrictions derived from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationContext {
    /// The membership the context was built for.
    pub membership: OrganizationMembership,

    /// Active policies, in fetch order. Order is significant.
    pub policies: Vec<OrganizationPolicy>,

    /// Permissions in effect for the user. Currently a direct copy of
    /// `membership.permissions`; policies do not narrow permissions yet.
    pub effective_permissions: Vec<String>,

    /// Restrictions materialized from enforced policies.
    pub restrictions: Vec<SettingRestriction>,

    /// Preferences fetched alongside the context, when available.
    pub preferences: Option<OrganizationPreferences>,
}

impl OrganizationContext {
    /// Look up a restriction by exact setting path.
    pub fn restriction_for(&self, path: &SettingPath) -> Option<&SettingRestriction> {
        self.restrictions
            .iter()
            .find(|r| &r.setting_path == path)
    }

    /// Check whether a setting path is restricted.
    pub fn is_restricted(&self, path: &SettingPath) -> bool {
        self.restriction_for(path).is_some()
    }

    /// Enforced policies, in fetch order.
    pub fn enforced_policies(&self) -> impl Iterator<Item = &OrganizationPolicy> {
        self.policies.iter().filter(|p| p.enforced)
    }

    /// Check whether the effective permission set grants a permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.effective_permissions.iter().any(|p| p == permission)
    }
}
