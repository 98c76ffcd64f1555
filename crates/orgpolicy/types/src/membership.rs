//! Organization memberships.
//!
//! A membership is read-only input from the engine's perspective: the
//! membership directory owns creation and mutation, the engine only
//! consumes fetched records. At most one membership per user carries
//! `is_default`; the directory is responsible for that invariant.

use crate::ids::OrganizationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's relationship to one organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationMembership {
    /// Organization this membership belongs to.
    pub organization_id: OrganizationId,

    /// Display name of the organization.
    pub organization_name: String,

    /// Primary domain of the organization.
    pub domain: String,

    /// Role granted to the user within the organization.
    pub role: OrganizationRole,

    /// Current status of the membership.
    pub status: MembershipStatus,

    /// Permissions granted by this membership.
    pub permissions: Vec<String>,

    /// When the user joined the organization.
    pub joined_at: DateTime<Utc>,

    /// Whether this is the user's default organization.
    pub is_default: bool,
}

impl OrganizationMembership {
    /// Create an active membership with no permissions.
    pub fn new(
        organization_id: impl Into<OrganizationId>,
        organization_name: impl Into<String>,
        role: OrganizationRole,
    ) -> Self {
        Self {
            organization_id: organization_id.into(),
            organization_name: organization_name.into(),
            domain: String::new(),
            role,
            status: MembershipStatus::Active,
            permissions: Vec::new(),
            joined_at: Utc::now(),
            is_default: false,
        }
    }

    /// Set the organization domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Set the membership status.
    pub fn with_status(mut self, status: MembershipStatus) -> Self {
        self.status = status;
        self
    }

    /// Grant a permission.
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.push(permission.into());
        self
    }

    /// Mark this membership as the user's default.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Check whether the membership is active.
    pub fn is_active(&self) -> bool {
        self.status == MembershipStatus::Active
    }

    /// Check whether the membership grants a permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

/// Role within an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationRole {
    Owner,
    Admin,
    Manager,
    Member,
    Viewer,
}

impl OrganizationRole {
    /// Whether the role can administer organization settings.
    pub fn is_administrative(&self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }
}

/// Status of a membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    Active,
    Pending,
    Suspended,
    Inactive,
}
