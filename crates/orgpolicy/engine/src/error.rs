//! Engine error types.

use orgpolicy_types::OrganizationId;
use thiserror::Error;

/// Errors produced while building an organization context.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested membership was not present in the supplied list.
    /// Carries the requested organization id, or `None` when the lookup
    /// was for the user's default membership.
    #[error("membership not found{}", membership_detail(.organization_id))]
    MembershipNotFound {
        organization_id: Option<OrganizationId>,
    },
}

fn membership_detail(organization_id: &Option<OrganizationId>) -> String {
    match organization_id {
        Some(id) => format!(" for organization {id}"),
        None => " (no default membership)".to_string(),
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
