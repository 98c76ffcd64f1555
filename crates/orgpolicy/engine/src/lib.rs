//! Veridoc organization policy engine
//!
//! Pure evaluation of user setting changes against organization policies.
//! The engine decides, for a given organization context, which settings a
//! user may edit, what value a setting must effectively take, and why a
//! proposed change is rejected.
//!
//! ## Key components
//!
//! - [`build_context`]: aggregates a membership, its policies, and the
//!   restrictions derived from them into an [`OrganizationContext`]
//! - [`validate_setting_change`]: (context, path, candidate) → allow or
//!   deny with a reason and the responsible policy
//! - [`effective_setting_value`]: the value a setting must take once
//!   policy overrides apply, regardless of user intent
//! - [`policy_violations`]: scans a full settings snapshot for policies
//!   violated right now (compliance view, not form gating)
//! - [`enforcement`]: thin adapter surface for UI controls and forms,
//!   consuming the core's outputs verbatim
//!
//! ## Fail-open
//!
//! When no context is loaded every validation allows and resolution
//! passes the user's value through unchanged. Absence of data is not a
//! restriction signal; this is deliberate, user-visible behavior.
//!
//! ## Evaluation order
//!
//! Restrictions are checked before per-kind rules and short-circuit when
//! non-overridable. Per-kind evaluation walks policies in fetch order,
//! skips unenforced entries, and stops at the first deny; the resolver
//! mirrors the same order, first override wins.
//!
//! ## Example
//!
//! ```rust
//! use orgpolicy_engine::{build_context, validate_setting_change, effective_setting_value};
//! use orgpolicy_types::{
//!     OrganizationMembership, OrganizationPolicy, OrganizationRole, PolicyRule,
//!     SecuritySettings, SettingPath,
//! };
//! use serde_json::json;
//!
//! let membership = OrganizationMembership::new("org-1", "Acme", OrganizationRole::Member);
//! let policies = vec![OrganizationPolicy::new(
//!     "pol-1",
//!     "Require MFA",
//!     PolicyRule::Security(SecuritySettings { require_mfa: true }),
//! )];
//!
//! let ctx = build_context(membership, policies, None);
//! let path = SettingPath::from("mfaEnabled");
//!
//! let decision = validate_setting_change(Some(&ctx), &path, &json!(false));
//! assert!(!decision.is_valid());
//!
//! let effective = effective_setting_value(Some(&ctx), &path, json!(false));
//! assert_eq!(effective, json!(true));
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod builder;
pub mod decision;
pub mod enforcement;
pub mod error;
pub mod resolve;
pub mod scan;
pub mod validate;

// Re-exports
pub use builder::{build_context, select_membership};
pub use decision::{ValidationDecision, Violation};
pub use enforcement::{
    control_state, form_violations, validate_fields, ControlMode, ControlState, FieldError,
};
pub use error::{EngineError, Result};
pub use resolve::effective_setting_value;
pub use scan::policy_violations;
pub use validate::validate_setting_change;
