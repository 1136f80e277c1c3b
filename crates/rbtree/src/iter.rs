use crate::error::TreeError;
use crate::node::{Ref, LEFT, RIGHT};
use crate::tree::RbTree;
use std::iter::FusedIterator;

/// In-order iterator over the keys of a [RbTree]
///
/// Created by [RbTree::iter]. A clone continues from the same position;
/// call [RbTree::iter] again to walk the tree from the start.
pub struct Iter<'a, K> {
    tree: &'a RbTree<K>,
    front: Ref,
    back: Ref,
    remaining: usize,
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.front;
        self.front = self.tree.next(x, RIGHT);
        self.remaining -= 1;
        Some(self.tree.key_of(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> DoubleEndedIterator for Iter<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.back;
        self.back = self.tree.next(x, LEFT);
        self.remaining -= 1;
        Some(self.tree.key_of(x))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

impl<'a, K> IntoIterator for &'a RbTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> RbTree<K> {
    /// Iterates over the keys in ascending order
    pub fn iter(&self) -> Iter<'_, K> {
        let (front, back) = if self.root.is_sentinel() {
            (self.root, self.root)
        } else {
            (self.edge(self.root, LEFT), self.edge(self.root, RIGHT))
        };
        Iter {
            tree: self,
            front,
            back,
            remaining: self.len(),
        }
    }

    fn check_capacity(&self, capacity: usize) -> Result<(), TreeError> {
        if capacity < self.len() {
            return Err(TreeError::BufferTooSmall {
                len: self.len(),
                capacity,
            });
        }
        Ok(())
    }
}

impl<K: Clone> RbTree<K> {
    /// Copies the keys in ascending order into the front of `out`
    ///
    /// Returns the number of keys written. Nothing is written when `out` is
    /// shorter than [RbTree::len].
    pub fn write_sorted(&self, out: &mut [K]) -> Result<usize, TreeError> {
        self.check_capacity(out.len())?;
        for (slot, key) in out.iter_mut().zip(self.iter()) {
            slot.clone_from(key);
        }
        Ok(self.len())
    }

    /// Collects the keys in ascending order into a vector
    ///
    /// `capacity` is only checked against [RbTree::len]; the vector is
    /// sized to the number of keys.
    pub fn to_sorted_vec(&self, capacity: usize) -> Result<Vec<K>, TreeError> {
        self.check_capacity(capacity)?;
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.iter().cloned());
        Ok(out)
    }
}
