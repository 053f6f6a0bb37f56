//! Observer registry for change notifications.
//!
//! ## Dispatch Rules
//!
//! - One ordered list of observers per [`EventKind`]
//! - Observers run synchronously, on the caller's thread, in registration order
//! - The first observer error stops dispatch of that event and is returned
//!   to the caller wrapped in [`DictionaryError::Observer`]
//!
//! Observers receive only the event payload. The dictionary is mutably
//! borrowed for the whole dispatch, so an observer cannot reach back into it.

use std::fmt;

use tracing::{trace, warn};

use crate::types::{DictionaryError, EventKind, KeyEvent, ObserverError, Result, SubscriptionId};

type KeyObserver<K> = Box<dyn FnMut(&KeyEvent<'_, K>) -> std::result::Result<(), ObserverError>>;
type ClearObserver = Box<dyn FnMut() -> std::result::Result<(), ObserverError>>;

/// Registered observers, grouped by event kind.
pub struct ObserverRegistry<K> {
    added: Vec<(SubscriptionId, KeyObserver<K>)>,
    removed: Vec<(SubscriptionId, KeyObserver<K>)>,
    changed: Vec<(SubscriptionId, KeyObserver<K>)>,
    cleared: Vec<(SubscriptionId, ClearObserver)>,

    /// Next subscription id (monotonic, never reused)
    next_id: u64,
}

impl<K> Default for ObserverRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ObserverRegistry<K> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
            changed: Vec::new(),
            cleared: Vec::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }

    fn keyed(&self, kind: EventKind) -> Option<&Vec<(SubscriptionId, KeyObserver<K>)>> {
        match kind {
            EventKind::ItemAdded => Some(&self.added),
            EventKind::ItemRemoved => Some(&self.removed),
            EventKind::ItemChanged => Some(&self.changed),
            EventKind::DictionaryCleared => None,
        }
    }

    fn keyed_mut(&mut self, kind: EventKind) -> Option<&mut Vec<(SubscriptionId, KeyObserver<K>)>> {
        match kind {
            EventKind::ItemAdded => Some(&mut self.added),
            EventKind::ItemRemoved => Some(&mut self.removed),
            EventKind::ItemChanged => Some(&mut self.changed),
            EventKind::DictionaryCleared => None,
        }
    }

    /// Register an observer for a keyed event kind
    ///
    /// # Panics
    ///
    /// Panics if `kind` is [`EventKind::DictionaryCleared`], which carries no
    /// key. Use [`ObserverRegistry::subscribe_cleared`] for that kind.
    pub fn subscribe<F>(&mut self, kind: EventKind, observer: F) -> SubscriptionId
    where
        F: FnMut(&KeyEvent<'_, K>) -> std::result::Result<(), ObserverError> + 'static,
    {
        assert!(kind.carries_key(), "{kind} observers take no key, use subscribe_cleared");

        let id = self.allocate_id();
        if let Some(list) = self.keyed_mut(kind) {
            list.push((id, Box::new(observer)));
        }
        trace!(%id, %kind, "observer registered");
        id
    }

    /// Register an observer for [`EventKind::DictionaryCleared`]
    pub fn subscribe_cleared<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut() -> std::result::Result<(), ObserverError> + 'static,
    {
        let id = self.allocate_id();
        self.cleared.push((id, Box::new(observer)));
        trace!(%id, kind = %EventKind::DictionaryCleared, "observer registered");
        id
    }

    /// Remove a single observer
    ///
    /// # Returns
    ///
    /// `true` if an observer with this id was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for list in [&mut self.added, &mut self.removed, &mut self.changed] {
            if let Some(index) = list.iter().position(|(sub, _)| *sub == id) {
                // Vec::remove keeps the remaining observers in order
                list.remove(index);
                trace!(%id, "observer unregistered");
                return true;
            }
        }

        if let Some(index) = self.cleared.iter().position(|(sub, _)| *sub == id) {
            self.cleared.remove(index);
            trace!(%id, "observer unregistered");
            return true;
        }

        false
    }

    /// Number of observers registered for `kind`
    pub fn count(&self, kind: EventKind) -> usize {
        match self.keyed(kind) {
            Some(list) => list.len(),
            None => self.cleared.len(),
        }
    }

    /// Total number of registered observers
    pub fn total(&self) -> usize {
        EventKind::ALL.iter().map(|kind| self.count(*kind)).sum()
    }

    /// Notify every observer of a keyed event
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Observer`] with the first observer failure;
    /// observers after it are not called.
    pub fn emit(&mut self, kind: EventKind, key: &K) -> Result<()> {
        let Some(list) = self.keyed_mut(kind) else {
            return Ok(());
        };
        let event = KeyEvent::new(kind, key);

        for (id, observer) in list.iter_mut() {
            trace!(%id, %kind, "dispatching");
            if let Err(source) = observer(&event) {
                warn!(%id, %kind, error = %source, "observer failed");
                return Err(DictionaryError::Observer { event: kind, source });
            }
        }

        Ok(())
    }

    /// Notify every observer of a clear
    ///
    /// # Errors
    ///
    /// Same contract as [`ObserverRegistry::emit`]
    pub fn emit_cleared(&mut self) -> Result<()> {
        let kind = EventKind::DictionaryCleared;

        for (id, observer) in self.cleared.iter_mut() {
            trace!(%id, %kind, "dispatching");
            if let Err(source) = observer() {
                warn!(%id, %kind, error = %source, "observer failed");
                return Err(DictionaryError::Observer { event: kind, source });
            }
        }

        Ok(())
    }
}

impl<K> fmt::Debug for ObserverRegistry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("added", &self.added.len())
            .field("removed", &self.removed.len())
            .field("changed", &self.changed.len())
            .field("cleared", &self.cleared.len())
            .finish()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
