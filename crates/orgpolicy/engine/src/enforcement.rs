//! UI enforcement adapters.
//!
//! Presentation-layer helpers that consume the core's outputs verbatim:
//! a structural control that hides, disables, or annotates a setting
//! control based on its restriction, and a form adapter that turns
//! validation results into field errors. No policy logic lives here.

use crate::decision::Violation;
use crate::scan::policy_violations;
use crate::validate::validate_setting_change;
use orgpolicy_types::{OrganizationContext, SettingPath};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a restricted control should present itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlMode {
    /// Remove the control entirely.
    Hide,
    /// Keep the control visible but non-interactive.
    Disable,
    /// Keep the control interactive and show an inline notice.
    ShowRestriction,
}

/// Resolved presentation state for one setting control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlState {
    /// No restriction applies; render normally.
    Editable,
    /// Do not render the control.
    Hidden,
    /// Render disabled, with the restriction reason as a tooltip/notice.
    Disabled { notice: String },
    /// Render normally with an inline restriction notice.
    Notice { notice: String },
}

/// Decide how a setting control should render under the current context.
///
/// Fail-open: with no context, or no restriction on the path, the control
/// is editable regardless of mode.
pub fn control_state(
    context: Option<&OrganizationContext>,
    path: &SettingPath,
    mode: ControlMode,
) -> ControlState {
    let restriction = match context.and_then(|c| c.restriction_for(path)) {
        Some(restriction) => restriction,
        None => return ControlState::Editable,
    };

    match mode {
        ControlMode::Hide => ControlState::Hidden,
        ControlMode::Disable => ControlState::Disabled {
            notice: restriction.reason.clone(),
        },
        ControlMode::ShowRestriction => ControlState::Notice {
            notice: restriction.reason.clone(),
        },
    }
}

/// A field-level error surfaced on a settings form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub setting: SettingPath,
    pub message: String,
}

/// Validate a batch of proposed field changes.
///
/// Returns one error per rejected field, in input order; an empty result
/// means the form may submit.
pub fn validate_fields(
    context: Option<&OrganizationContext>,
    changes: &[(SettingPath, Value)],
) -> Vec<FieldError> {
    changes
        .iter()
        .filter_map(|(path, candidate)| {
            let decision = validate_setting_change(context, path, candidate);
            decision.reason().map(|reason| FieldError {
                setting: path.clone(),
                message: reason.to_string(),
            })
        })
        .collect()
}

/// Form-level compliance banner source: the scanner's violations for the
/// form's full snapshot.
pub fn form_violations(
    context: Option<&OrganizationContext>,
    snapshot: &Value,
) -> Vec<Violation> {
    policy_violations(context, snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_context;
    use orgpolicy_types::{
        OrganizationMembership, OrganizationPolicy, OrganizationRole, PolicyRule,
        SecuritySettings,
    };
    use serde_json::json;

    fn ctx() -> OrganizationContext {
        let membership =
            OrganizationMembership::new("org-1", "Acme Corp", OrganizationRole::Member);
        build_context(
            membership,
            vec![OrganizationPolicy::new(
                "pol-mfa",
                "Require MFA",
                PolicyRule::Security(SecuritySettings { require_mfa: true }),
            )],
            None,
        )
    }

    #[test]
    fn unrestricted_paths_stay_editable_in_every_mode() {
        let ctx = ctx();
        let path = SettingPath::from("theme");
        for mode in [ControlMode::Hide, ControlMode::Disable, ControlMode::ShowRestriction] {
            assert_eq!(control_state(Some(&ctx), &path, mode), ControlState::Editable);
        }
    }

    #[test]
    fn restricted_path_follows_the_requested_mode() {
        let ctx = ctx();
        let path = SettingPath::from("mfaEnabled");

        assert_eq!(
            control_state(Some(&ctx), &path, ControlMode::Hide),
            ControlState::Hidden
        );
        match control_state(Some(&ctx), &path, ControlMode::Disable) {
            ControlState::Disabled { notice } => assert!(notice.contains("Multi-factor")),
            other => panic!("unexpected state: {other:?}"),
        }
        match control_state(Some(&ctx), &path, ControlMode::ShowRestriction) {
            ControlState::Notice { notice } => assert!(notice.contains("Multi-factor")),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn no_context_means_everything_editable() {
        let path = SettingPath::from("mfaEnabled");
        assert_eq!(
            control_state(None, &path, ControlMode::Hide),
            ControlState::Editable
        );
    }

    #[test]
    fn form_adapter_reports_rejected_fields_only() {
        let ctx = ctx();
        let changes = vec![
            (SettingPath::from("mfaEnabled"), json!(false)),
            (SettingPath::from("theme"), json!("dark")),
        ];

        let errors = validate_fields(Some(&ctx), &changes);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].setting.as_str(), "mfaEnabled");
    }

    #[test]
    fn form_violations_mirror_the_scanner() {
        let ctx = ctx();
        let violations = form_violations(Some(&ctx), &json!({ "mfaEnabled": false }));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].policy_id.as_str(), "pol-mfa");
    }
}
