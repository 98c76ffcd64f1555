//! The organization session.
//!
//! Owns the collaborators and the context store, and exposes the surface
//! UI layers consume: the switch flow on the write side, and synchronous
//! policy reads over the current snapshot on the read side.

use crate::directory::{MembershipDirectory, PolicyStore, PreferencesStore};
use crate::error::{Result, SessionError};
use crate::store::ContextStore;
use orgpolicy_engine::{
    build_context, effective_setting_value, policy_violations, select_membership,
    validate_setting_change, ValidationDecision, Violation,
};
use orgpolicy_types::{
    OrganizationContext, OrganizationId, PreferencesUpdate, PreferencesUpdateOutcome,
    SettingPath, SettingRestriction, UserId,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{info, instrument};

/// A user's login session against the organization layer.
pub struct OrganizationSession {
    directory: Arc<dyn MembershipDirectory>,
    policies: Arc<dyn PolicyStore>,
    preferences: Arc<dyn PreferencesStore>,
    store: ContextStore,
}

impl OrganizationSession {
    /// Create a session over the given collaborators, with no context
    /// loaded yet.
    pub fn new(
        directory: Arc<dyn MembershipDirectory>,
        policies: Arc<dyn PolicyStore>,
        preferences: Arc<dyn PreferencesStore>,
    ) -> Self {
        Self {
            directory,
            policies,
            preferences,
            store: ContextStore::new(),
        }
    }

    /// Switch to an organization, or to the user's default when no id is
    /// given. Fetches memberships, policies, and preferences, builds the
    /// context, and installs it atomically.
    ///
    /// When switches overlap, only the most recently started one may
    /// commit; an older switch resolving late fails with
    /// [`SessionError::Superseded`] and leaves the newer context in place.
    #[instrument(skip(self), fields(user = %user_id))]
    pub async fn switch_organization(
        &self,
        user_id: &UserId,
        organization_id: Option<OrganizationId>,
    ) -> Result<Arc<OrganizationContext>> {
        let generation = self.store.begin_switch();

        let memberships = self.directory.list_memberships(user_id).await?;
        let membership = select_membership(&memberships, organization_id.as_ref())?.clone();

        let policies = self.policies.list_policies(&membership.organization_id).await?;
        let preferences = self
            .preferences
            .get_preferences(&membership.organization_id)
            .await?;

        let context = build_context(membership, policies, Some(preferences));

        match self.store.commit(generation, context)? {
            Some(installed) => {
                info!(
                    organization = %installed.membership.organization_id,
                    "switched organization"
                );
                Ok(installed)
            }
            None => Err(SessionError::Superseded),
        }
    }

    /// Discard the current context (logout).
    pub fn log_out(&self) -> Result<()> {
        self.store.clear()
    }

    /// Snapshot the current context, if any.
    pub fn current_context(&self) -> Result<Option<Arc<OrganizationContext>>> {
        self.store.current()
    }

    /// Check whether a setting path is restricted under the current
    /// context. Fail-open: `false` when no context is loaded.
    pub fn is_setting_restricted(&self, path: &SettingPath) -> Result<bool> {
        let context = self.store.current()?;
        Ok(context.map(|c| c.is_restricted(path)).unwrap_or(false))
    }

    /// Fetch the restriction for a setting path, if any.
    pub fn setting_restriction(&self, path: &SettingPath) -> Result<Option<SettingRestriction>> {
        let context = self.store.current()?;
        Ok(context.and_then(|c| c.restriction_for(path).cloned()))
    }

    /// Validate a proposed change to one setting against the current
    /// context.
    pub fn validate_setting_change(
        &self,
        path: &SettingPath,
        candidate: &Value,
    ) -> Result<ValidationDecision> {
        let context = self.store.current()?;
        Ok(validate_setting_change(context.as_deref(), path, candidate))
    }

    /// Resolve the effective value for one setting under the current
    /// context.
    pub fn effective_setting_value(&self, path: &SettingPath, value: Value) -> Result<Value> {
        let context = self.store.current()?;
        Ok(effective_setting_value(context.as_deref(), path, value))
    }

    /// Scan a full settings snapshot for current policy violations.
    pub fn policy_violations(&self, snapshot: &Value) -> Result<Vec<Violation>> {
        let context = self.store.current()?;
        Ok(policy_violations(context.as_deref(), snapshot))
    }

    /// Persist a preferences update, silently coercing every submitted
    /// field toward policy compliance first.
    pub async fn save_preferences(
        &self,
        update: PreferencesUpdate,
    ) -> Result<PreferencesUpdateOutcome> {
        let context = self.store.current()?;
        let settings = coerce_settings(context.as_deref(), update.settings);

        self.preferences
            .update_preferences(PreferencesUpdate {
                organization_id: update.organization_id,
                settings,
            })
            .await
    }
}

/// Run every leaf of a settings object through effective-value
/// resolution, preserving the object's shape. Nested objects contribute
/// dot-joined paths; flat dotted keys are used as-is.
fn coerce_settings(context: Option<&OrganizationContext>, settings: Value) -> Value {
    fn walk(context: Option<&OrganizationContext>, prefix: &str, value: Value) -> Value {
        match value {
            Value::Object(fields) => {
                let coerced: Map<String, Value> = fields
                    .into_iter()
                    .map(|(key, field)| {
                        let path = if prefix.is_empty() {
                            key.clone()
                        } else {
                            format!("{prefix}.{key}")
                        };
                        (key, walk(context, &path, field))
                    })
                    .collect();
                Value::Object(coerced)
            }
            leaf => effective_setting_value(context, &SettingPath::from(prefix), leaf),
        }
    }

    walk(context, "", settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgpolicy_engine::build_context;
    use orgpolicy_types::{
        OrganizationMembership, OrganizationPolicy, OrganizationRole, PolicyRule,
        SecuritySettings, VerificationSettings,
    };
    use serde_json::json;

    fn enforcing_context() -> OrganizationContext {
        let membership =
            OrganizationMembership::new("org-1", "Acme Corp", OrganizationRole::Member);
        build_context(
            membership,
            vec![
                OrganizationPolicy::new(
                    "pol-mfa",
                    "Require MFA",
                    PolicyRule::Security(SecuritySettings { require_mfa: true }),
                ),
                OrganizationPolicy::new(
                    "pol-share",
                    "No auto-sharing",
                    PolicyRule::Verification(VerificationSettings {
                        allow_auto_sharing: false,
                    }),
                ),
            ],
            None,
        )
    }

    #[test]
    fn coercion_rewrites_nested_and_flat_paths() {
        let ctx = enforcing_context();
        let submitted = json!({
            "mfaEnabled": false,
            "verification": { "autoShare": true },
            "theme": "dark"
        });

        let coerced = coerce_settings(Some(&ctx), submitted);
        assert_eq!(coerced["mfaEnabled"], json!(true));
        assert_eq!(coerced["verification"]["autoShare"], json!(false));
        assert_eq!(coerced["theme"], json!("dark"));
    }

    #[test]
    fn coercion_without_context_is_identity() {
        let submitted = json!({
            "mfaEnabled": false,
            "verification": { "autoShare": true }
        });
        assert_eq!(coerce_settings(None, submitted.clone()), submitted);
    }

    #[test]
    fn coercion_handles_flat_dotted_keys() {
        let ctx = enforcing_context();
        let submitted = json!({ "verification.autoShare": true });
        let coerced = coerce_settings(Some(&ctx), submitted);
        assert_eq!(coerced["verification.autoShare"], json!(false));
    }
}
