//! The context store.
//!
//! One shared cell holds the current organization context behind an
//! `Arc`, replaced wholesale on every organization switch and never
//! mutated in place, so readers always observe a complete aggregate.
//!
//! Switches are versioned by a monotonically increasing generation:
//! every switch takes a generation up front and only the commit carrying
//! the latest generation may install its context. An older in-flight
//! switch whose fetches resolve late is dropped instead of clobbering
//! the newer context.

use crate::error::{Result, SessionError};
use orgpolicy_types::OrganizationContext;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Ticket identifying one organization switch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchGeneration(u64);

/// Single-writer, many-reader cell for the current organization context.
#[derive(Debug, Default)]
pub struct ContextStore {
    cell: RwLock<Option<Arc<OrganizationContext>>>,
    generation: AtomicU64,
}

impl ContextStore {
    /// Create an empty store. Until a context commits, every policy read
    /// fails open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current context, if any.
    pub fn current(&self) -> Result<Option<Arc<OrganizationContext>>> {
        let cell = self.cell.read().map_err(|_| SessionError::Lock)?;
        Ok(cell.clone())
    }

    /// Start a switch, claiming the next generation. Any switch started
    /// earlier can no longer commit.
    pub fn begin_switch(&self) -> SwitchGeneration {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        SwitchGeneration(generation)
    }

    /// Install a context built for the given switch.
    ///
    /// Returns the installed context, or `None` when the switch was
    /// superseded by a newer one; the cell is untouched in that case.
    pub fn commit(
        &self,
        generation: SwitchGeneration,
        context: OrganizationContext,
    ) -> Result<Option<Arc<OrganizationContext>>> {
        let mut cell = self.cell.write().map_err(|_| SessionError::Lock)?;

        // Re-check under the write lock so a newer switch beginning
        // between the load and the store cannot be overwritten.
        if self.generation.load(Ordering::SeqCst) != generation.0 {
            warn!(
                organization = %context.membership.organization_id,
                "dropping superseded organization switch"
            );
            return Ok(None);
        }

        let context = Arc::new(context);
        *cell = Some(Arc::clone(&context));
        debug!(
            organization = %context.membership.organization_id,
            "organization context installed"
        );
        Ok(Some(context))
    }

    /// Discard the current context (logout). Also claims a generation so
    /// a switch still in flight cannot resurrect the old organization.
    pub fn clear(&self) -> Result<()> {
        let mut cell = self.cell.write().map_err(|_| SessionError::Lock)?;
        self.generation.fetch_add(1, Ordering::SeqCst);
        *cell = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgpolicy_types::{OrganizationMembership, OrganizationRole};

    fn context(org: &str) -> OrganizationContext {
        let membership = OrganizationMembership::new(org, org, OrganizationRole::Member);
        orgpolicy_engine::build_context(membership, Vec::new(), None)
    }

    #[test]
    fn empty_store_has_no_context() {
        let store = ContextStore::new();
        assert!(store.current().unwrap().is_none());
    }

    #[test]
    fn latest_switch_commits() {
        let store = ContextStore::new();
        let generation = store.begin_switch();
        let installed = store.commit(generation, context("org-1")).unwrap();
        assert!(installed.is_some());
        assert_eq!(
            store
                .current()
                .unwrap()
                .unwrap()
                .membership
                .organization_id
                .as_str(),
            "org-1"
        );
    }

    #[test]
    fn superseded_switch_is_dropped() {
        let store = ContextStore::new();
        let older = store.begin_switch();
        let newer = store.begin_switch();

        assert!(store.commit(newer, context("org-2")).unwrap().is_some());
        assert!(store.commit(older, context("org-1")).unwrap().is_none());

        let current = store.current().unwrap().unwrap();
        assert_eq!(current.membership.organization_id.as_str(), "org-2");
    }

    #[test]
    fn clear_discards_context_and_blocks_in_flight_switches() {
        let store = ContextStore::new();
        let generation = store.begin_switch();
        store.commit(generation, context("org-1")).unwrap();

        let in_flight = store.begin_switch();
        store.clear().unwrap();

        assert!(store.current().unwrap().is_none());
        assert!(store.commit(in_flight, context("org-1")).unwrap().is_none());
        assert!(store.current().unwrap().is_none());
    }
}
