//! Entry node for slab-based storage.
//!
//! ## Design
//!
//! `EntryNode` holds one key/value pair plus the link to the next entry in
//! the chain. Links are slab keys, not references, so the whole chain lives
//! in one arena owned by the dictionary.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup
//!
//! ## Linked List
//!
//! Entries form a singly-linked list:
//! - `next`: Points to the next entry (older) in the chain
//!
//! Each slab key is referenced by exactly one predecessor `next` link or by
//! the chain head, never both.

/// Entry node stored in the slab.
///
/// ## Memory Layout
///
/// ```text
/// EntryNode {
///     key: K
///     value: V
///     next: Option<usize> (16 bytes with alignment)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct EntryNode<K, V> {
    /// Key identity, never modified after insertion
    key: K,

    /// Current value, overwritten in place by `set`
    pub value: V,

    /// Next entry in the chain (slab key)
    /// None if this is the tail (oldest entry)
    pub next: Option<usize>,
}

impl<K, V> EntryNode<K, V> {
    /// Create a new entry node (not yet linked)
    ///
    /// # Example
    ///
    /// ```
    /// use linked_dictionary::dictionary::EntryNode;
    ///
    /// let node = EntryNode::new(1, "One");
    ///
    /// assert_eq!(*node.key(), 1);
    /// assert!(node.next.is_none());
    /// ```
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            next: None,
        }
    }

    /// Get the entry key
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Check if this node is the last one in its chain
    #[inline]
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }

    /// Replace the value, returning the previous one
    #[inline]
    pub fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Split the node into its key/value pair, dropping the link
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_node_new() {
        let node = EntryNode::new(7u32, "seven".to_string());

        assert_eq!(*node.key(), 7);
        assert_eq!(node.value, "seven");
        assert!(node.next.is_none());
        assert!(node.is_tail());
    }

    #[test]
    fn test_entry_node_linking() {
        let mut node = EntryNode::new(1u32, ());

        node.next = Some(4);
        assert!(!node.is_tail());

        node.next = None;
        assert!(node.is_tail());
    }

    #[test]
    fn test_entry_node_replace_value() {
        let mut node = EntryNode::new("k", 10);

        let old = node.replace_value(20);
        assert_eq!(old, 10);
        assert_eq!(node.value, 20);
        assert_eq!(*node.key(), "k");
    }

    #[test]
    fn test_entry_node_into_pair() {
        let mut node = EntryNode::new(2u8, 'b');
        node.next = Some(9);

        assert_eq!(node.into_pair(), (2, 'b'));
    }
}
