//! Observable dictionary over a singly-linked entry chain.
//!
//! ## Architecture
//!
//! - **Slab**: arena holding every entry node; links are slab keys
//! - **Chain**: head pointer and count; new entries are linked at the head
//! - **ObserverRegistry**: per-event observer lists, dispatched synchronously
//!
//! ## Ordering
//!
//! Iteration, `keys`, `values` and `copy_into` all walk head to tail, which
//! is reverse insertion order. Updating a value never moves its entry.
//!
//! ## Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `add` / `set` | O(n) (duplicate scan) |
//! | `get` / `contains_key` / `remove` | O(n) |
//! | `clear` | O(n) drop, O(1) relink |
//! | `len` | O(1) |
//!
//! ## Example
//!
//! ```
//! use linked_dictionary::LinkedDictionary;
//!
//! let mut dict = LinkedDictionary::new();
//! dict.add(1, "One").unwrap();
//! dict.add(2, "Two").unwrap();
//!
//! assert_eq!(dict.keys(), [2, 1]);
//! assert_eq!(dict.values(), ["Two", "One"]);
//! assert!(dict.remove(&2).unwrap());
//! assert_eq!(dict.iter().collect::<Vec<_>>(), [(&1, &"One")]);
//! ```

use std::fmt;

use slab::Slab;
use tracing::{debug, trace};

use crate::dictionary::{Chain, EntryNode, IntoIter, Iter, Located, ObserverRegistry};
use crate::types::{
    DictionaryError, EntryKey, EventKind, KeyEvent, ObserverError, Result, SubscriptionId,
};

/// Key-unique dictionary backed by a singly-linked chain of entries.
///
/// Lookups are linear scans. Every change is reported to registered
/// observers before the mutating call returns.
pub struct LinkedDictionary<K, V> {
    /// Entry storage
    /// Key: slab index, Value: EntryNode
    entries: Slab<EntryNode<K, V>>,

    /// Head pointer and entry count
    chain: Chain,

    /// Change observers
    observers: ObserverRegistry<K>,
}

impl<K, V> Default for LinkedDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> LinkedDictionary<K, V> {
    /// Create a new empty dictionary
    pub fn new() -> Self {
        Self {
            entries: Slab::new(),
            chain: Chain::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Create a dictionary with pre-allocated entry slots
    ///
    /// # Example
    ///
    /// ```
    /// use linked_dictionary::LinkedDictionary;
    ///
    /// let dict: LinkedDictionary<u32, String> = LinkedDictionary::with_capacity(64);
    /// assert!(dict.capacity() >= 64);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Slab::with_capacity(capacity),
            chain: Chain::new(),
            observers: ObserverRegistry::new(),
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Check if the dictionary is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Iterate entries head to tail (newest first)
    ///
    /// Each call starts from the current head.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.entries, self.chain.head(), self.chain.len())
    }

    // ========================================================================
    // Observers
    // ========================================================================

    /// Register an observer for [`EventKind::ItemAdded`]
    pub fn on_item_added<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&KeyEvent<'_, K>) -> std::result::Result<(), ObserverError> + 'static,
    {
        self.observers.subscribe(EventKind::ItemAdded, observer)
    }

    /// Register an observer for [`EventKind::ItemRemoved`]
    pub fn on_item_removed<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&KeyEvent<'_, K>) -> std::result::Result<(), ObserverError> + 'static,
    {
        self.observers.subscribe(EventKind::ItemRemoved, observer)
    }

    /// Register an observer for [`EventKind::ItemChanged`]
    pub fn on_item_changed<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&KeyEvent<'_, K>) -> std::result::Result<(), ObserverError> + 'static,
    {
        self.observers.subscribe(EventKind::ItemChanged, observer)
    }

    /// Register an observer for [`EventKind::DictionaryCleared`]
    pub fn on_cleared<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut() -> std::result::Result<(), ObserverError> + 'static,
    {
        self.observers.subscribe_cleared(observer)
    }

    /// Remove a previously registered observer
    ///
    /// # Returns
    ///
    /// `true` if the observer was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of observers registered for `kind`
    #[inline]
    pub fn observer_count(&self, kind: EventKind) -> usize {
        self.observers.count(kind)
    }

    // ========================================================================
    // Clear
    // ========================================================================

    /// Drop every entry and notify [`EventKind::DictionaryCleared`] observers
    ///
    /// The event fires exactly once per call, including on an empty
    /// dictionary.
    ///
    /// # Errors
    ///
    /// [`DictionaryError::Observer`] if an observer fails. The dictionary is
    /// already empty at that point.
    pub fn clear(&mut self) -> Result<()> {
        let dropped = self.chain.len();
        self.entries.clear();
        self.chain.reset();
        debug!(dropped, "dictionary cleared");

        self.observers.emit_cleared()
    }
}

impl<K: EntryKey, V> LinkedDictionary<K, V> {
    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn check_key(key: &K) -> Result<()> {
        if key.is_absent() {
            return Err(DictionaryError::InvalidArgument { argument: "key" });
        }
        Ok(())
    }

    fn locate(&self, key: &K) -> Option<Located> {
        self.chain.find(&self.entries, |node| node.key() == key)
    }

    /// Link a new entry at the head. Caller has already ruled out duplicates.
    fn link_new(&mut self, key: K, value: V) -> Result<()> {
        let slot = self.entries.insert(EntryNode::new(key, value));
        self.chain.push_front(slot, &mut self.entries);

        let key = self.entries[slot].key();
        debug!(?key, len = self.chain.len(), "entry added");
        self.observers.emit(EventKind::ItemAdded, key)
    }

    /// Unlink and free a located entry, then notify
    fn unlink_located(&mut self, located: Located) -> Result<V> {
        self.chain.unlink(located, &mut self.entries);
        let (key, value) = self.entries.remove(located.slot).into_pair();

        debug!(?key, len = self.chain.len(), "entry removed");
        self.observers.emit(EventKind::ItemRemoved, &key)?;
        Ok(value)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Get the value stored under `key`
    ///
    /// # Errors
    ///
    /// - [`DictionaryError::InvalidArgument`] if the key is absent
    /// - [`DictionaryError::KeyNotFound`] if no entry matches
    ///
    /// # Example
    ///
    /// ```
    /// use linked_dictionary::{DictionaryError, LinkedDictionary};
    ///
    /// let mut dict = LinkedDictionary::new();
    /// dict.add("alpha", 1).unwrap();
    ///
    /// assert_eq!(*dict.get(&"alpha").unwrap(), 1);
    /// assert!(matches!(
    ///     dict.get(&"beta"),
    ///     Err(DictionaryError::KeyNotFound { .. })
    /// ));
    /// ```
    pub fn get(&self, key: &K) -> Result<&V> {
        Self::check_key(key)?;
        match self.locate(key) {
            Some(located) => Ok(&self.entries[located.slot].value),
            None => Err(DictionaryError::key_not_found(key)),
        }
    }

    /// Get a mutable reference to the value stored under `key`
    ///
    /// Changes made through the reference are not reported to observers;
    /// use [`LinkedDictionary::set`] for an observed update.
    ///
    /// # Errors
    ///
    /// Same as [`LinkedDictionary::get`]
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        Self::check_key(key)?;
        match self.locate(key) {
            Some(located) => Ok(&mut self.entries[located.slot].value),
            None => Err(DictionaryError::key_not_found(key)),
        }
    }

    /// Look up `key` without failing on a miss
    ///
    /// # Errors
    ///
    /// [`DictionaryError::InvalidArgument`] if the key is absent
    pub fn try_get(&self, key: &K) -> Result<Option<&V>> {
        Self::check_key(key)?;
        Ok(self
            .locate(key)
            .map(|located| &self.entries[located.slot].value))
    }

    /// Look up `key`, reporting `(found, value)` with `V::default()` on a miss
    ///
    /// # Errors
    ///
    /// [`DictionaryError::InvalidArgument`] if the key is absent
    pub fn try_get_or_default(&self, key: &K) -> Result<(bool, V)>
    where
        V: Clone + Default,
    {
        Ok(match self.try_get(key)? {
            Some(value) => (true, value.clone()),
            None => (false, V::default()),
        })
    }

    /// Check whether an entry with `key` exists
    ///
    /// # Errors
    ///
    /// [`DictionaryError::InvalidArgument`] if the key is absent
    pub fn contains_key(&self, key: &K) -> Result<bool> {
        Self::check_key(key)?;
        Ok(self.locate(key).is_some())
    }

    /// Check whether an entry with both `key` and `value` exists
    ///
    /// # Errors
    ///
    /// [`DictionaryError::InvalidArgument`] if the key is absent
    pub fn contains(&self, key: &K, value: &V) -> Result<bool>
    where
        V: PartialEq,
    {
        Self::check_key(key)?;
        Ok(self
            .chain
            .find(&self.entries, |node| node.key() == key && node.value == *value)
            .is_some())
    }

    // ========================================================================
    // Insertion and Update
    // ========================================================================

    /// Insert a new entry at the head of the chain
    ///
    /// # Errors
    ///
    /// - [`DictionaryError::InvalidArgument`] if the key is absent
    /// - [`DictionaryError::DuplicateKey`] if an equal key exists; the
    ///   dictionary is unchanged and no event fires
    /// - [`DictionaryError::Observer`] if an `ItemAdded` observer fails; the
    ///   entry stays inserted
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        Self::check_key(&key)?;
        if self.locate(&key).is_some() {
            return Err(DictionaryError::duplicate_key(&key));
        }

        self.link_new(key, value)
    }

    /// Insert a `(key, value)` pair
    ///
    /// # Errors
    ///
    /// Same as [`LinkedDictionary::add`]
    #[inline]
    pub fn add_pair(&mut self, (key, value): (K, V)) -> Result<()> {
        self.add(key, value)
    }

    /// Insert or overwrite
    ///
    /// An existing entry keeps its chain position and fires
    /// [`EventKind::ItemChanged`]. A new key behaves exactly like
    /// [`LinkedDictionary::add`] and fires [`EventKind::ItemAdded`].
    ///
    /// # Errors
    ///
    /// - [`DictionaryError::InvalidArgument`] if the key is absent
    /// - [`DictionaryError::Observer`] if an observer fails
    ///
    /// # Example
    ///
    /// ```
    /// use linked_dictionary::LinkedDictionary;
    ///
    /// let mut dict = LinkedDictionary::new();
    /// dict.set(5, "x").unwrap();
    /// dict.set(5, "y").unwrap();
    ///
    /// assert_eq!(dict.len(), 1);
    /// assert_eq!(*dict.get(&5).unwrap(), "y");
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Result<()> {
        Self::check_key(&key)?;

        let Some(located) = self.locate(&key) else {
            return self.link_new(key, value);
        };

        let node = &mut self.entries[located.slot];
        node.value = value;
        trace!(key = ?node.key(), "entry value changed");

        self.observers.emit(EventKind::ItemChanged, &key)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Remove the entry with `key`
    ///
    /// # Returns
    ///
    /// `true` if an entry was removed, `false` if none matched (no event)
    ///
    /// # Errors
    ///
    /// - [`DictionaryError::InvalidArgument`] if the key is absent
    /// - [`DictionaryError::Observer`] if an `ItemRemoved` observer fails;
    ///   the entry is already gone
    pub fn remove(&mut self, key: &K) -> Result<bool> {
        Ok(self.take(key)?.is_some())
    }

    /// Remove the entry with `key`, returning its value
    ///
    /// # Errors
    ///
    /// Same as [`LinkedDictionary::remove`]
    pub fn take(&mut self, key: &K) -> Result<Option<V>> {
        Self::check_key(key)?;
        if self.chain.is_empty() {
            return Ok(None);
        }

        match self.locate(key) {
            Some(located) => self.unlink_located(located).map(Some),
            None => Ok(None),
        }
    }

    /// Remove the entry only if both key and value match
    ///
    /// # Errors
    ///
    /// Same as [`LinkedDictionary::remove`]
    pub fn remove_pair(&mut self, (key, value): (&K, &V)) -> Result<bool>
    where
        V: PartialEq,
    {
        Self::check_key(key)?;
        let hit = self
            .chain
            .find(&self.entries, |node| node.key() == key && node.value == *value);

        match hit {
            Some(located) => self.unlink_located(located).map(|_| true),
            None => Ok(false),
        }
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    /// Keys in chain order (newest first)
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len());
        keys.extend(self.iter().map(|(key, _)| key.clone()));
        keys
    }

    /// Values in chain order (newest first)
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        let mut values = Vec::with_capacity(self.len());
        values.extend(self.iter().map(|(_, value)| value.clone()));
        values
    }

    /// Copy every `(key, value)` pair into `destination` starting at `offset`
    ///
    /// Pairs are written in chain order. Slots outside
    /// `offset..offset + len()` are left untouched. All checks run before
    /// the first write.
    ///
    /// # Errors
    ///
    /// - [`DictionaryError::InvalidArgument`] if `destination` is `None`
    /// - [`DictionaryError::IndexOutOfRange`] if `offset > destination.len()`
    /// - [`DictionaryError::InsufficientCapacity`] if fewer than `len()`
    ///   slots remain after `offset`
    ///
    /// # Example
    ///
    /// ```
    /// use linked_dictionary::LinkedDictionary;
    ///
    /// let mut dict = LinkedDictionary::new();
    /// dict.add(1, 'a').unwrap();
    /// dict.add(2, 'b').unwrap();
    ///
    /// let mut slots = [(0, '-'); 3];
    /// dict.copy_into(Some(&mut slots), 1).unwrap();
    ///
    /// assert_eq!(slots, [(0, '-'), (2, 'b'), (1, 'a')]);
    /// ```
    pub fn copy_into(&self, destination: Option<&mut [(K, V)]>, offset: usize) -> Result<()>
    where
        K: Clone,
        V: Clone,
    {
        let destination = destination.ok_or(DictionaryError::InvalidArgument {
            argument: "destination",
        })?;

        let len = destination.len();
        if offset > len {
            return Err(DictionaryError::IndexOutOfRange { offset, len });
        }

        let available = len - offset;
        if available < self.len() {
            return Err(DictionaryError::InsufficientCapacity {
                required: self.len(),
                available,
            });
        }

        for (slot, (key, value)) in destination[offset..].iter_mut().zip(self.iter()) {
            *slot = (key.clone(), value.clone());
        }

        Ok(())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<'a, K, V> IntoIterator for &'a LinkedDictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for LinkedDictionary<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.entries, self.chain.head())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for LinkedDictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedDictionary")
            .field("entries", &DebugEntries(self))
            .field("observers", &self.observers.total())
            .finish()
    }
}

struct DebugEntries<'a, K, V>(&'a LinkedDictionary<K, V>);

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for DebugEntries<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
