//! Iterators over a dictionary chain.
//!
//! Both iterators walk head to tail, so entries come out newest first.
//! [`Iter`] borrows the dictionary: while it is alive the chain cannot be
//! mutated, which rules out structural changes mid-iteration at compile time.

use std::iter::FusedIterator;

use slab::Slab;

use crate::dictionary::EntryNode;

/// Borrowing iterator yielding `(&K, &V)` in chain order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    slab: &'a Slab<EntryNode<K, V>>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(slab: &'a Slab<EntryNode<K, V>>, head: Option<usize>, len: usize) -> Self {
        Self {
            slab,
            cursor: head,
            remaining: len,
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            slab: self.slab,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = &self.slab[slot];
        self.cursor = node.next;
        self.remaining -= 1;
        Some((node.key(), &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Owning iterator yielding `(K, V)` in chain order.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    slab: Slab<EntryNode<K, V>>,
    cursor: Option<usize>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(slab: Slab<EntryNode<K, V>>, head: Option<usize>) -> Self {
        Self { slab, cursor: head }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = self.slab.remove(slot);
        self.cursor = node.next;
        Some(node.into_pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every slab entry still present is unvisited
        (self.slab.len(), Some(self.slab.len()))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Chain;

    fn build(keys: &[u32]) -> (Slab<EntryNode<u32, String>>, Chain) {
        let mut slab = Slab::new();
        let mut chain = Chain::new();
        for &key in keys {
            let slot = slab.insert(EntryNode::new(key, format!("v{key}")));
            chain.push_front(slot, &mut slab);
        }
        (slab, chain)
    }

    #[test]
    fn test_iter_empty() {
        let (slab, chain) = build(&[]);
        let mut iter = Iter::new(&slab, chain.head(), chain.len());

        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_iter_chain_order() {
        let (slab, chain) = build(&[1, 2, 3]);
        let iter = Iter::new(&slab, chain.head(), chain.len());

        let keys: Vec<u32> = iter.map(|(k, _)| *k).collect();
        assert_eq!(keys, [3, 2, 1]);
    }

    #[test]
    fn test_iter_exact_size() {
        let (slab, chain) = build(&[1, 2, 3]);
        let mut iter = Iter::new(&slab, chain.head(), chain.len());

        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn test_iter_clone_is_independent() {
        let (slab, chain) = build(&[1, 2]);
        let mut iter = Iter::new(&slab, chain.head(), chain.len());
        iter.next();

        let rest: Vec<_> = iter.clone().collect();
        assert_eq!(rest, [(&1, &"v1".to_string())]);
        assert_eq!(iter.count(), 1);
    }

    #[test]
    fn test_into_iter_chain_order() {
        let (slab, chain) = build(&[10, 20, 30]);
        let iter = IntoIter::new(slab, chain.head());

        assert_eq!(iter.len(), 3);
        let pairs: Vec<_> = iter.collect();
        assert_eq!(
            pairs,
            [
                (30, "v30".to_string()),
                (20, "v20".to_string()),
                (10, "v10".to_string()),
            ]
        );
    }

    #[test]
    fn test_into_iter_after_unlink() {
        let (mut slab, mut chain) = build(&[1, 2, 3]);
        let located = chain.find(&slab, |node| *node.key() == 2).unwrap();
        chain.unlink(located, &mut slab);
        slab.remove(located.slot);

        let keys: Vec<u32> = IntoIter::new(slab, chain.head()).map(|(k, _)| k).collect();
        assert_eq!(keys, [3, 1]);
    }
}
