//! Element handle registry.
//!
//! Maps server-issued element ids to the live handle for that id. The
//! registry holds weak references only: handles keep their session alive,
//! never the other way around.

// ============================================================================
// Imports
// ============================================================================

use std::sync::{Arc, Weak};

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::identifiers::{ElementId, SessionId};
use crate::session::Session;

use super::element::{Element, ElementInner};

// ============================================================================
// ElementRegistry
// ============================================================================

/// Per-session map from element id to handle.
///
/// Invariant: at most one live handle per id.
#[derive(Default)]
pub(crate) struct ElementRegistry {
    handles: FxHashMap<ElementId, Weak<ElementInner>>,
}

impl ElementRegistry {
    /// Returns the live handle for `id`, minting one if there is none.
    pub fn resolve(&mut self, session: &Session, session_id: &SessionId, id: &str) -> Element {
        let element_id = ElementId::new(id);

        if let Some(element) = self.get(&element_id) {
            trace!(element_id = %element_id, "Element handle reused");
            return element;
        }

        self.prune();

        let element = Element::new(session.clone(), element_id, session_id.clone());
        self.register(&element);
        trace!(element_id = %element.id(), "Element handle minted");
        element
    }

    /// Returns the live handle for `id`.
    pub fn get(&self, id: &ElementId) -> Option<Element> {
        self.handles
            .get(id)
            .and_then(Weak::upgrade)
            .map(|inner| Element { inner })
    }

    /// Registers a freshly minted handle.
    ///
    /// # Panics
    ///
    /// Panics if `element`'s id already has a live handle.
    pub fn register(&mut self, element: &Element) {
        let live = self
            .handles
            .get(element.id())
            .is_some_and(|existing| existing.strong_count() > 0);
        assert!(!live, "element {} already has a live handle", element.id());

        self.handles
            .insert(element.id().clone(), Arc::downgrade(&element.inner));
    }

    /// Number of live handles.
    pub fn len(&self) -> usize {
        self.handles
            .values()
            .filter(|handle| handle.strong_count() > 0)
            .count()
    }

    /// Forgets every handle and returns how many were live.
    pub fn clear(&mut self) -> usize {
        let live = self.len();
        self.handles.clear();
        live
    }

    /// Drops entries whose handles are gone.
    fn prune(&mut self) {
        self.handles.retain(|_, handle| handle.strong_count() > 0);
    }
}

// ============================================================================
// Tests
// ============================================================================
