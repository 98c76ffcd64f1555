//! Collaborator interfaces.
//!
//! The session consumes three external collaborators, all modeled as
//! single-shot request/response operations: they resolve once or fail
//! once, with no streaming or partial results. Timeouts and cancellation
//! for the underlying transport are the collaborator's responsibility.

use crate::error::Result;
use async_trait::async_trait;
use orgpolicy_types::{
    OrganizationId, OrganizationMembership, OrganizationPolicy, OrganizationPreferences,
    PreferencesUpdate, PreferencesUpdateOutcome, UserId,
};

/// Supplies the organizations a user belongs to.
#[async_trait]
pub trait MembershipDirectory: Send + Sync {
    /// List all memberships for a user. At most one may be flagged as
    /// the user's default.
    async fn list_memberships(&self, user_id: &UserId) -> Result<Vec<OrganizationMembership>>;
}

/// Supplies the active policies for an organization.
#[async_trait]
pub trait PolicyStore: Send + Sync {
    /// List policies in evaluation order. Order is significant: the
    /// engine resolves conflicts by first-wins over this order.
    async fn list_policies(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<OrganizationPolicy>>;
}

/// Persists per-organization user preferences.
#[async_trait]
pub trait PreferencesStore: Send + Sync {
    /// Fetch the current preferences for an organization.
    async fn get_preferences(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<OrganizationPreferences>;

    /// Persist a preferences update. The payload has already been coerced
    /// through policy resolution by the session.
    async fn update_preferences(
        &self,
        update: PreferencesUpdate,
    ) -> Result<PreferencesUpdateOutcome>;
}
