//! Change notification types.
//!
//! ## Event Kinds
//!
//! | Kind | Payload | Fired by |
//! |------|---------|----------|
//! | `ItemAdded` | key | `add`, `add_pair`, `set` on a new key |
//! | `ItemRemoved` | key | `remove`, `remove_pair`, `take` on a hit |
//! | `ItemChanged` | key | `set` on an existing key |
//! | `DictionaryCleared` | none | `clear`, always |

use std::fmt;

/// The four kinds of change a dictionary reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A new entry was linked at the head of the chain
    ItemAdded,
    /// An entry was unlinked from the chain
    ItemRemoved,
    /// An existing entry's value was overwritten in place
    ItemChanged,
    /// The whole chain was dropped
    DictionaryCleared,
}

impl EventKind {
    /// All event kinds, in declaration order
    pub const ALL: [EventKind; 4] = [
        EventKind::ItemAdded,
        EventKind::ItemRemoved,
        EventKind::ItemChanged,
        EventKind::DictionaryCleared,
    ];

    /// Whether events of this kind carry a key payload
    #[inline]
    pub fn carries_key(&self) -> bool {
        !matches!(self, EventKind::DictionaryCleared)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::ItemAdded => "item added",
            EventKind::ItemRemoved => "item removed",
            EventKind::ItemChanged => "item changed",
            EventKind::DictionaryCleared => "dictionary cleared",
        };
        f.write_str(name)
    }
}

/// Payload for add/remove/change notifications.
///
/// Borrows the key for the duration of the dispatch. Observers that need to
/// keep the key clone it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent<'a, K> {
    kind: EventKind,
    key: &'a K,
}

impl<'a, K> KeyEvent<'a, K> {
    pub(crate) fn new(kind: EventKind, key: &'a K) -> Self {
        debug_assert!(kind.carries_key(), "{kind} has no key payload");
        Self { kind, key }
    }

    /// The kind of change that produced this event
    #[inline]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The key involved in the change
    #[inline]
    pub fn key(&self) -> &'a K {
        self.key
    }
}

/// Handle returned when an observer is registered.
///
/// Pass it to `unsubscribe` to remove that single observer. Ids are unique
/// per dictionary and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
