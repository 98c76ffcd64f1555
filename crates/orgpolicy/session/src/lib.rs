//! Veridoc organization session
//!
//! The stateful shell around the pure policy engine:
//!
//! - [`ContextStore`]: a single-writer, many-reader cell holding the one
//!   current [`OrganizationContext`], versioned by a switch generation so
//!   overlapping organization switches cannot commit out of order
//! - collaborator traits for the membership directory, policy store, and
//!   preferences store, with in-memory implementations for development
//!   and testing
//! - [`OrganizationSession`]: the switch flow (fetch, build, commit) plus
//!   the read-side facade UI layers consume
//!
//! The engine itself never does I/O; everything asynchronous lives here.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod directory;
pub mod error;
pub mod memory;
pub mod session;
pub mod store;

// Re-exports
pub use directory::{MembershipDirectory, PolicyStore, PreferencesStore};
pub use error::{Result, SessionError};
pub use memory::{
    InMemoryMembershipDirectory, InMemoryPolicyStore, InMemoryPreferencesStore,
};
pub use session::OrganizationSession;
pub use store::{ContextStore, SwitchGeneration};
