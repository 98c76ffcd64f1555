//! Organization policies.
//!
//! A policy is a named rule bundle with an enforcement gate and a payload
//! whose shape depends on the policy kind. The payload is a tagged union
//! rather than a free-form map so that the validator, resolver, and
//! scanner each carry an exhaustive match: adding a kind without teaching
//! every consumer about it is a compile error.

use crate::ids::PolicyId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named rule bundle scoped to one organization.
///
/// Policies are fetched as an ordered list per organization and order is
/// significant: when multiple enforced policies define an effective value
/// for the same setting path, the first one in iteration order wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationPolicy {
    pub id: PolicyId,

    /// Human-readable policy name.
    pub name: String,

    /// Human-readable description of what the policy enforces.
    pub description: String,

    /// Whether the policy is enforced. Unenforced policies are advisory
    /// and skipped by validation, resolution, and scanning.
    pub enforced: bool,

    /// Kind-specific rule payload.
    #[serde(flatten)]
    pub rule: PolicyRule,
}

impl OrganizationPolicy {
    /// Create an enforced policy.
    pub fn new(id: impl Into<PolicyId>, name: impl Into<String>, rule: PolicyRule) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            enforced: true,
            rule,
        }
    }

    /// Set the policy description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the policy as advisory (not enforced).
    pub fn advisory(mut self) -> Self {
        self.enforced = false;
        self
    }

    /// The kind tag of this policy's rule.
    pub fn kind(&self) -> PolicyKind {
        self.rule.kind()
    }
}

/// Kind-specific policy payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "settings", rename_all = "kebab-case")]
pub enum PolicyRule {
    Security(SecuritySettings),
    Verification(VerificationSettings),
    Notification(NotificationSettings),
    DataRetention(DataRetentionSettings),
    ApiAccess(ApiAccessSettings),
}

impl PolicyRule {
    /// The kind tag of this rule.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Security(_) => PolicyKind::Security,
            Self::Verification(_) => PolicyKind::Verification,
            Self::Notification(_) => PolicyKind::Notification,
            Self::DataRetention(_) => PolicyKind::DataRetention,
            Self::ApiAccess(_) => PolicyKind::ApiAccess,
        }
    }
}

/// Closed set of policy kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    Security,
    Verification,
    Notification,
    DataRetention,
    ApiAccess,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Security => "security",
            Self::Verification => "verification",
            Self::Notification => "notification",
            Self::DataRetention => "data-retention",
            Self::ApiAccess => "api-access",
        };
        f.write_str(tag)
    }
}

/// Security policy settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecuritySettings {
    /// Require multi-factor authentication for all members.
    #[serde(default)]
    pub require_mfa: bool,
}

/// Verification policy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSettings {
    /// Allow verification results to be shared automatically.
    #[serde(default = "default_allow_auto_sharing")]
    pub allow_auto_sharing: bool,
}

impl Default for VerificationSettings {
    fn default() -> Self {
        Self {
            allow_auto_sharing: default_allow_auto_sharing(),
        }
    }
}

const fn default_allow_auto_sharing() -> bool {
    true
}

/// Notification policy settings.
///
/// The reference behavior attaches no validation rules to notification
/// policies; the payload exists so organization-specific rules (mandatory
/// channels, digest cadence) have a typed home when they land.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Channels the organization mandates, if any.
    #[serde(default)]
    pub required_channels: Vec<String>,
}

/// Data-retention policy settings. No validation rules in the reference
/// behavior; retention ceilings are a known extension point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataRetentionSettings {
    /// Retention period in days, when the organization sets one.
    #[serde(default)]
    pub retention_days: Option<u32>,
}

/// API-access policy settings. No validation rules in the reference
/// behavior; scope allow-lists are a known extension point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiAccessSettings {
    /// OAuth scopes the organization allows, if restricted.
    #[serde(default)]
    pub allowed_scopes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn policy_serializes_with_kind_tag() {
        let policy = OrganizationPolicy::new(
            "pol-1",
            "Require MFA",
            PolicyRule::Security(SecuritySettings { require_mfa: true }),
        )
        .with_description("All members must enable MFA");

        let value = serde_json::to_value(&policy).unwrap();
        assert_eq!(value["type"], json!("security"));
        assert_eq!(value["settings"]["require_mfa"], json!(true));
        assert_eq!(value["enforced"], json!(true));
    }

    #[test]
    fn policy_deserializes_each_kind() {
        let raw = json!({
            "id": "pol-2",
            "name": "Retention",
            "description": "",
            "enforced": false,
            "type": "data-retention",
            "settings": { "retention_days": 90 }
        });

        let policy: OrganizationPolicy = serde_json::from_value(raw).unwrap();
        assert_eq!(policy.kind(), PolicyKind::DataRetention);
        assert!(!policy.enforced);
        match policy.rule {
            PolicyRule::DataRetention(settings) => {
                assert_eq!(settings.retention_days, Some(90));
            }
            other => panic!("unexpected rule: {other:?}"),
        }
    }

    #[test]
    fn kind_display_matches_serde_tags() {
        assert_eq!(PolicyKind::ApiAccess.to_string(), "api-access");
        assert_eq!(PolicyKind::Security.to_string(), "security");
        let tag = serde_json::to_string(&PolicyKind::DataRetention).unwrap();
        assert_eq!(tag, "\"data-retention\"");
    }
}
