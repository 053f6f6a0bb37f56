//! Chain bookkeeping for entries stored in a slab.
//!
//! ## Design
//!
//! A `Chain` is the head pointer and entry count of a singly-linked list
//! whose nodes live in a `Slab<EntryNode>`. The chain itself holds no entry
//! data; every operation takes the slab it indexes into.
//!
//! ## Chain Structure
//!
//! ```text
//! head (newest) -> entry2 -> entry3 -> tail (oldest) -> None
//! ```
//!
//! - New entries are linked at the head
//! - Scans run head to tail and report the predecessor of a hit
//! - Unlinking re-points the predecessor (or the head) past the hit

use slab::Slab;

use crate::dictionary::EntryNode;

/// Position of an entry found by a scan.
///
/// Carries the predecessor so the entry can be unlinked without a second
/// walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    /// Slab key of the matching entry
    pub slot: usize,

    /// Slab key of the entry linking to it, None if it is the head
    pub prev: Option<usize>,
}

/// Head pointer and count of a singly-linked entry chain.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    /// First entry (most recently added, slab key)
    head: Option<usize>,

    /// Number of entries reachable from `head`
    len: usize,
}

impl Chain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of linked entries
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the chain is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slab key of the head entry
    #[inline]
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Link an entry at the head of the chain
    ///
    /// The previous head becomes the new entry's successor.
    ///
    /// # Panics
    ///
    /// Panics if the key doesn't exist in the slab
    pub fn push_front<K, V>(&mut self, slot: usize, slab: &mut Slab<EntryNode<K, V>>) {
        let node = &mut slab[slot];
        debug_assert!(node.is_tail(), "pushed node must be unlinked");

        node.next = self.head;
        self.head = Some(slot);
        self.len += 1;
    }

    /// Scan head to tail for the first entry matching `predicate`
    ///
    /// # Returns
    ///
    /// The entry's position together with its predecessor, or None
    pub fn find<K, V, F>(&self, slab: &Slab<EntryNode<K, V>>, mut predicate: F) -> Option<Located>
    where
        F: FnMut(&EntryNode<K, V>) -> bool,
    {
        let mut prev = None;
        let mut cursor = self.head;

        while let Some(slot) = cursor {
            let node = &slab[slot];
            if predicate(node) {
                return Some(Located { slot, prev });
            }
            prev = Some(slot);
            cursor = node.next;
        }

        None
    }

    /// Unlink a previously located entry
    ///
    /// The node stays in the slab with its link cleared; the caller decides
    /// whether to free the slot.
    ///
    /// # Panics
    ///
    /// Panics if `located` refers to keys that don't exist in the slab
    pub fn unlink<K, V>(&mut self, located: Located, slab: &mut Slab<EntryNode<K, V>>) {
        let next = slab[located.slot].next.take();

        match located.prev {
            Some(prev) => {
                debug_assert_eq!(slab[prev].next, Some(located.slot), "stale predecessor");
                slab[prev].next = next;
            }
            None => {
                debug_assert_eq!(self.head, Some(located.slot), "stale head");
                self.head = next;
            }
        }

        self.len -= 1;
    }

    /// Forget every entry
    ///
    /// Only resets bookkeeping. The caller clears the slab.
    #[inline]
    pub fn reset(&mut self) {
        self.head = None;
        self.len = 0;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_node(slab: &mut Slab<EntryNode<u32, &'static str>>, key: u32) -> usize {
        slab.insert(EntryNode::new(key, "v"))
    }

    fn collect_keys(chain: &Chain, slab: &Slab<EntryNode<u32, &'static str>>) -> Vec<u32> {
        let mut keys = Vec::new();
        let mut cursor = chain.head();
        while let Some(slot) = cursor {
            keys.push(*slab[slot].key());
            cursor = slab[slot].next;
        }
        keys
    }

    #[test]
    fn test_chain_new() {
        let chain = Chain::new();

        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert!(chain.head().is_none());
    }

    #[test]
    fn test_chain_push_single() {
        let mut slab = Slab::with_capacity(10);
        let mut chain = Chain::new();

        let slot = create_test_node(&mut slab, 1);
        chain.push_front(slot, &mut slab);

        assert_eq!(chain.len(), 1);
        assert_eq!(chain.head(), Some(slot));
        assert!(slab[slot].is_tail());
    }

    #[test]
    fn test_chain_push_multiple_reverses_order() {
        let mut slab = Slab::with_capacity(10);
        let mut chain = Chain::new();

        let slot1 = create_test_node(&mut slab, 1);
        let slot2 = create_test_node(&mut slab, 2);
        let slot3 = create_test_node(&mut slab, 3);

        chain.push_front(slot1, &mut slab);
        chain.push_front(slot2, &mut slab);
        chain.push_front(slot3, &mut slab);

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.head(), Some(slot3));

        // Verify linked list structure: 3 -> 2 -> 1
        assert_eq!(slab[slot3].next, Some(slot2));
        assert_eq!(slab[slot2].next, Some(slot1));
        assert!(slab[slot1].is_tail());
        assert_eq!(collect_keys(&chain, &slab), [3, 2, 1]);
    }

    #[test]
    fn test_chain_find_reports_predecessor() {
        let mut slab = Slab::with_capacity(10);
        let mut chain = Chain::new();

        let slot1 = create_test_node(&mut slab, 1);
        let slot2 = create_test_node(&mut slab, 2);
        chain.push_front(slot1, &mut slab);
        chain.push_front(slot2, &mut slab);

        let head_hit = chain.find(&slab, |node| *node.key() == 2).unwrap();
        assert_eq!(head_hit, Located { slot: slot2, prev: None });

        let tail_hit = chain.find(&slab, |node| *node.key() == 1).unwrap();
        assert_eq!(tail_hit, Located { slot: slot1, prev: Some(slot2) });

        assert!(chain.find(&slab, |node| *node.key() == 9).is_none());
    }

    #[test]
    fn test_chain_find_empty() {
        let slab: Slab<EntryNode<u32, &'static str>> = Slab::new();
        let chain = Chain::new();

        assert!(chain.find(&slab, |_| true).is_none());
    }

    #[test]
    fn test_chain_unlink_head() {
        let mut slab = Slab::with_capacity(10);
        let mut chain = Chain::new();

        let slot1 = create_test_node(&mut slab, 1);
        let slot2 = create_test_node(&mut slab, 2);
        chain.push_front(slot1, &mut slab);
        chain.push_front(slot2, &mut slab);

        let located = chain.find(&slab, |node| *node.key() == 2).unwrap();
        chain.unlink(located, &mut slab);

        assert_eq!(chain.len(), 1);
        assert_eq!(chain.head(), Some(slot1));
        assert!(slab[slot2].is_tail());
        assert_eq!(collect_keys(&chain, &slab), [1]);
    }

    #[test]
    fn test_chain_unlink_middle() {
        let mut slab = Slab::with_capacity(10);
        let mut chain = Chain::new();

        let slot1 = create_test_node(&mut slab, 1);
        let slot2 = create_test_node(&mut slab, 2);
        let slot3 = create_test_node(&mut slab, 3);
        chain.push_front(slot1, &mut slab);
        chain.push_front(slot2, &mut slab);
        chain.push_front(slot3, &mut slab);

        let located = chain.find(&slab, |node| *node.key() == 2).unwrap();
        chain.unlink(located, &mut slab);

        // Verify new linked list: 3 -> 1
        assert_eq!(chain.len(), 2);
        assert_eq!(slab[slot3].next, Some(slot1));
        assert_eq!(collect_keys(&chain, &slab), [3, 1]);
    }

    #[test]
    fn test_chain_unlink_tail() {
        let mut slab = Slab::with_capacity(10);
        let mut chain = Chain::new();

        let slot1 = create_test_node(&mut slab, 1);
        let slot2 = create_test_node(&mut slab, 2);
        chain.push_front(slot1, &mut slab);
        chain.push_front(slot2, &mut slab);

        let located = chain.find(&slab, |node| *node.key() == 1).unwrap();
        chain.unlink(located, &mut slab);

        assert_eq!(chain.len(), 1);
        assert!(slab[slot2].is_tail());
        assert_eq!(collect_keys(&chain, &slab), [2]);
    }

    #[test]
    fn test_chain_unlink_only() {
        let mut slab = Slab::with_capacity(10);
        let mut chain = Chain::new();

        let slot = create_test_node(&mut slab, 1);
        chain.push_front(slot, &mut slab);

        let located = chain.find(&slab, |_| true).unwrap();
        chain.unlink(located, &mut slab);

        assert!(chain.is_empty());
        assert!(chain.head().is_none());
    }

    #[test]
    fn test_chain_reset() {
        let mut slab = Slab::with_capacity(10);
        let mut chain = Chain::new();

        let slot = create_test_node(&mut slab, 1);
        chain.push_front(slot, &mut slab);
        chain.reset();

        assert!(chain.is_empty());
        assert!(chain.head().is_none());
    }
}
