//! Validation decisions and violations.

use orgpolicy_types::{PolicyId, SettingPath};
use serde::{Deserialize, Serialize};

/// Outcome of validating a single proposed setting change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationDecision {
    /// The change is allowed.
    Allow,

    /// The change is rejected.
    Deny {
        /// Human-readable reason shown to the user.
        reason: String,
        /// Policy responsible for the rejection.
        policy_id: PolicyId,
    },
}

impl ValidationDecision {
    /// Create an allow decision.
    pub fn allow() -> Self {
        Self::Allow
    }

    /// Create a deny decision.
    pub fn deny(reason: impl Into<String>, policy_id: impl Into<PolicyId>) -> Self {
        Self::Deny {
            reason: reason.into(),
            policy_id: policy_id.into(),
        }
    }

    /// Check whether the change is allowed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// The rejection reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Deny { reason, .. } => Some(reason),
        }
    }

    /// The policy responsible for a rejection, if any.
    pub fn policy_id(&self) -> Option<&PolicyId> {
        match self {
            Self::Allow => None,
            Self::Deny { policy_id, .. } => Some(policy_id),
        }
    }
}

/// A policy violated by the current settings snapshot.
///
/// Violations are informational and non-fatal: the scanner accumulates
/// every one it finds instead of short-circuiting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Setting path that is out of compliance.
    pub setting: SettingPath,

    /// Human-readable description of the violation.
    pub violation: String,

    /// Policy being violated.
    pub policy_id: PolicyId,

    /// Name of the policy being violated.
    pub policy_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_carries_no_detail() {
        let decision = ValidationDecision::allow();
        assert!(decision.is_valid());
        assert!(decision.reason().is_none());
        assert!(decision.policy_id().is_none());
    }

    #[test]
    fn deny_carries_reason_and_policy() {
        let decision = ValidationDecision::deny("MFA is required", "pol-1");
        assert!(!decision.is_valid());
        assert_eq!(decision.reason(), Some("MFA is required"));
        assert_eq!(decision.policy_id().map(|p| p.as_str()), Some("pol-1"));
    }
}
