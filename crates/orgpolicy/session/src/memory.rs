//! In-memory collaborator implementations.
//!
//! Suitable for development and testing. Production deployments back the
//! same traits with the platform's directory and preferences services.

use crate::directory::{MembershipDirectory, PolicyStore, PreferencesStore};
use crate::error::{Result, SessionError};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use orgpolicy_types::{
    OrganizationId, OrganizationMembership, OrganizationPolicy, OrganizationPreferences,
    PreferencesUpdate, PreferencesUpdateOutcome, UserId,
};

/// In-memory membership directory.
#[derive(Default)]
pub struct InMemoryMembershipDirectory {
    by_user: DashMap<UserId, Vec<OrganizationMembership>>,
}

impl InMemoryMembershipDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a membership for a user.
    pub fn add_membership(&self, user_id: impl Into<UserId>, membership: OrganizationMembership) {
        self.by_user
            .entry(user_id.into())
            .or_default()
            .push(membership);
    }
}

#[async_trait]
impl MembershipDirectory for InMemoryMembershipDirectory {
    async fn list_memberships(&self, user_id: &UserId) -> Result<Vec<OrganizationMembership>> {
        Ok(self
            .by_user
            .get(user_id)
            .map(|m| m.clone())
            .unwrap_or_default())
    }
}

/// In-memory policy store.
#[derive(Default)]
pub struct InMemoryPolicyStore {
    by_organization: DashMap<OrganizationId, Vec<OrganizationPolicy>>,
}

impl InMemoryPolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a policy to an organization's list. Insertion order is
    /// evaluation order.
    pub fn add_policy(
        &self,
        organization_id: impl Into<OrganizationId>,
        policy: OrganizationPolicy,
    ) {
        self.by_organization
            .entry(organization_id.into())
            .or_default()
            .push(policy);
    }
}

#[async_trait]
impl PolicyStore for InMemoryPolicyStore {
    async fn list_policies(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<OrganizationPolicy>> {
        Ok(self
            .by_organization
            .get(organization_id)
            .map(|p| p.clone())
            .unwrap_or_default())
    }
}

/// In-memory preferences store.
#[derive(Default)]
pub struct InMemoryPreferencesStore {
    by_organization: DashMap<OrganizationId, OrganizationPreferences>,
}

impl InMemoryPreferencesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed preferences for an organization.
    pub fn set_preferences(&self, preferences: OrganizationPreferences) {
        self.by_organization
            .insert(preferences.organization_id.clone(), preferences);
    }
}

#[async_trait]
impl PreferencesStore for InMemoryPreferencesStore {
    async fn get_preferences(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<OrganizationPreferences> {
        Ok(self
            .by_organization
            .get(organization_id)
            .map(|p| p.clone())
            .unwrap_or_else(|| OrganizationPreferences::empty(organization_id.clone())))
    }

    async fn update_preferences(
        &self,
        update: PreferencesUpdate,
    ) -> Result<PreferencesUpdateOutcome> {
        if !update.settings.is_object() {
            return Err(SessionError::Preferences(
                "settings payload must be an object".to_string(),
            ));
        }

        let preferences = OrganizationPreferences {
            organization_id: update.organization_id.clone(),
            settings: update.settings,
            updated_at: Utc::now(),
        };
        self.by_organization
            .insert(update.organization_id, preferences.clone());

        Ok(PreferencesUpdateOutcome::saved(preferences))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgpolicy_types::OrganizationRole;
    use serde_json::json;

    #[tokio::test]
    async fn directory_returns_recorded_memberships() {
        let directory = InMemoryMembershipDirectory::new();
        directory.add_membership(
            "user-1",
            OrganizationMembership::new("org-1", "Acme", OrganizationRole::Member),
        );

        let memberships = directory
            .list_memberships(&UserId::new("user-1"))
            .await
            .unwrap();
        assert_eq!(memberships.len(), 1);

        let none = directory
            .list_memberships(&UserId::new("user-2"))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn preferences_round_trip() {
        let store = InMemoryPreferencesStore::new();
        let org = OrganizationId::new("org-1");

        let empty = store.get_preferences(&org).await.unwrap();
        assert!(empty.settings.as_object().unwrap().is_empty());

        let outcome = store
            .update_preferences(PreferencesUpdate {
                organization_id: org.clone(),
                settings: json!({ "mfaEnabled": true }),
            })
            .await
            .unwrap();
        assert!(outcome.success);

        let fetched = store.get_preferences(&org).await.unwrap();
        assert_eq!(fetched.settings["mfaEnabled"], json!(true));
    }

    #[tokio::test]
    async fn non_object_settings_are_rejected() {
        let store = InMemoryPreferencesStore::new();
        let err = store
            .update_preferences(PreferencesUpdate {
                organization_id: OrganizationId::new("org-1"),
                settings: json!("not an object"),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::Preferences(_)));
    }
}
