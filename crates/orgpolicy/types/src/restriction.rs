//! Setting restrictions.
//!
//! A restriction is a denormalized fact derived from policies at context
//! build time: "this exact path is locked, because of this policy". It is
//! distinct from the generic per-kind validation rules and is checked
//! before them.

use crate::ids::PolicyId;
use crate::setting::SettingPath;
use serde::{Deserialize, Serialize};

/// A precomputed, path-specific lock on one setting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingRestriction {
    /// Exact setting path this restriction applies to.
    pub setting_path: SettingPath,

    /// Human-readable reason shown to the user.
    pub reason: String,

    /// Policy the restriction originates from.
    pub policy_id: PolicyId,

    /// Name of the originating policy.
    pub policy_name: String,

    /// Whether the user may override the restriction. When `false` the
    /// restriction short-circuits validation for its path.
    pub can_override: bool,
}

impl SettingRestriction {
    /// Create a non-overridable restriction.
    pub fn locked(
        setting_path: impl Into<SettingPath>,
        reason: impl Into<String>,
        policy_id: impl Into<PolicyId>,
        policy_name: impl Into<String>,
    ) -> Self {
        Self {
            setting_path: setting_path.into(),
            reason: reason.into(),
            policy_id: policy_id.into(),
            policy_name: policy_name.into(),
            can_override: false,
        }
    }

    /// Mark the restriction as overridable by the user.
    pub fn overridable(mut self) -> Self {
        self.can_override = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_restriction_cannot_be_overridden() {
        let restriction =
            SettingRestriction::locked("mfaEnabled", "MFA required", "pol-1", "Require MFA");
        assert!(!restriction.can_override);
        assert_eq!(restriction.setting_path.as_str(), "mfaEnabled");

        let relaxed = restriction.overridable();
        assert!(relaxed.can_override);
    }
}
