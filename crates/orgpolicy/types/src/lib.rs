//! Veridoc organization policy types
//!
//! Core data model for organization-scoped policy enforcement:
//!
//! - **OrganizationMembership**: a user's relationship to one organization
//! - **OrganizationPolicy**: an enforced or advisory rule bundle, typed by
//!   domain via [`PolicyRule`]
//! - **SettingRestriction**: a precomputed, path-specific lock derived from
//!   policies
//! - **OrganizationContext**: the aggregate the engine evaluates against
//! - **OrganizationPreferences**: the free-form settings snapshot owned by
//!   the preferences collaborator
//!
//! Policy payloads are a tagged union keyed by policy kind, so each kind's
//! settings shape is statically known and every consumer match is checked
//! for exhaustiveness by the compiler.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod context;
pub mod ids;
pub mod membership;
pub mod policy;
pub mod preferences;
pub mod restriction;
pub mod setting;

// Re-export main types
pub use context::OrganizationContext;
pub use ids::{OrganizationId, PolicyId, UserId};
pub use membership::{MembershipStatus, OrganizationMembership, OrganizationRole};
pub use policy::{
    ApiAccessSettings, DataRetentionSettings, NotificationSettings, OrganizationPolicy,
    PolicyKind, PolicyRule, SecuritySettings, VerificationSettings,
};
pub use preferences::{
    OrganizationPreferences, PreferencesUpdate, PreferencesUpdateOutcome,
};
pub use restriction::SettingRestriction;
pub use setting::{lookup_path, value_is_truthy, SettingPath};
