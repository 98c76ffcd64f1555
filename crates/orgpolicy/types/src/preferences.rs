//! Organization preferences.
//!
//! The settings payload itself is free-form JSON: its shape belongs to
//! the UI and the preferences collaborator, not to the policy engine.
//! The engine only reads individual paths out of it.

use crate::ids::OrganizationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Persisted per-organization user preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationPreferences {
    pub organization_id: OrganizationId,

    /// Full settings snapshot, keyed by setting path.
    pub settings: Value,

    /// When the preferences were last written.
    pub updated_at: DateTime<Utc>,
}

impl OrganizationPreferences {
    /// Create empty preferences for an organization.
    pub fn empty(organization_id: impl Into<OrganizationId>) -> Self {
        Self {
            organization_id: organization_id.into(),
            settings: Value::Object(Default::default()),
            updated_at: Utc::now(),
        }
    }

    /// Replace the settings snapshot.
    pub fn with_settings(mut self, settings: Value) -> Self {
        self.settings = settings;
        self
    }
}

/// Request payload for a preferences update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    pub organization_id: OrganizationId,

    /// Settings to write, keyed by setting path. Values are written after
    /// policy coercion; the caller's values are not authoritative.
    pub settings: Value,
}

/// Response payload for a preferences update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesUpdateOutcome {
    pub success: bool,

    /// Human-readable status message.
    pub message: String,

    /// Preferences as persisted, when the update succeeded.
    pub preferences: Option<OrganizationPreferences>,
}

impl PreferencesUpdateOutcome {
    /// Successful outcome carrying the persisted preferences.
    pub fn saved(preferences: OrganizationPreferences) -> Self {
        Self {
            success: true,
            message: "preferences updated".to_string(),
            preferences: Some(preferences),
        }
    }

    /// Failed outcome with a reason.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            preferences: None,
        }
    }
}
