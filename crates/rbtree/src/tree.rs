// Copyright (c) 2025 gudzpoz
// Copyright (c) 2019 Sevag Hanssian
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::node::{Links, Node, NodeHandle, Ref, LEFT, RIGHT, SENTINEL};
use slab::Slab;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

/// A red-black tree over a totally ordered key type
///
/// Nodes are kept in a slab and linked by index. All absent children, as
/// well as the parent of the root, point to one shared black sentinel.
/// Duplicate keys are allowed and are placed to the right of equal keys.
pub struct RbTree<K> {
    pub(crate) slab: Slab<Node<K>>,
    pub(crate) root: Ref,
    pub(crate) nil: Links,
    id: u64,
    next_stamp: u64,
}

impl<K> Index<Ref> for RbTree<K> {
    type Output = Links;

    fn index(&self, index: Ref) -> &Self::Output {
        if index.is_sentinel() {
            &self.nil
        } else {
            &self.slab[index.0].links
        }
    }
}
impl<K> IndexMut<Ref> for RbTree<K> {
    fn index_mut(&mut self, index: Ref) -> &mut Self::Output {
        if index.is_sentinel() {
            &mut self.nil
        } else {
            &mut self.slab[index.0].links
        }
    }
}

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> RbTree<K> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self {
            slab: Slab::new(),
            root: SENTINEL,
            nil: Links::sentinel(),
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            next_stamp: 0,
        }
    }

    /// Returns the number of keys in the tree
    pub fn len(&self) -> usize {
        self.slab.len()
    }

    /// Checks if the tree holds no keys
    pub fn is_empty(&self) -> bool {
        self.root.is_sentinel()
    }

    /// Removes every node
    ///
    /// Handles obtained before the call are invalidated.
    pub fn clear(&mut self) {
        let mut released = 0usize;
        let mut stack = Vec::new();
        if !self.root.is_sentinel() {
            stack.push(self.root);
        }
        while let Some(x) = stack.pop() {
            let node = self.slab.remove(x.0);
            for child in node.links.children {
                if !child.is_sentinel() {
                    stack.push(child);
                }
            }
            released += 1;
        }
        debug_assert!(self.slab.is_empty());
        self.root = SENTINEL;
        self.reset_sentinel();
        log::debug!("tree {}: released {} nodes", self.id, released);
    }

    pub(crate) fn key_of(&self, x: Ref) -> &K {
        debug_assert!(!x.is_sentinel());
        &self.slab[x.0].key
    }

    pub(crate) fn alloc(&mut self, key: K) -> Ref {
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        Ref(self.slab.insert(Node::new(key, stamp)))
    }

    pub(crate) fn handle(&self, x: Ref) -> NodeHandle {
        NodeHandle {
            tree: self.id,
            index: x.0,
            stamp: self.slab[x.0].stamp,
        }
    }

    pub(crate) fn handle_or_none(&self, x: Ref) -> Option<NodeHandle> {
        if x.is_sentinel() {
            None
        } else {
            Some(self.handle(x))
        }
    }

    /// Maps a handle back to its slot, rejecting foreign and stale handles
    pub(crate) fn resolve(&self, handle: NodeHandle) -> Option<Ref> {
        if handle.tree != self.id {
            return None;
        }
        match self.slab.get(handle.index) {
            Some(node) if node.stamp == handle.stamp => Some(Ref(handle.index)),
            _ => None,
        }
    }

    pub(crate) fn reset_sentinel(&mut self) {
        self.nil = Links::sentinel();
    }

    /// Puts `with` where `node` hangs, under `node`'s parent or as root
    ///
    /// `node`'s children are left alone. `with` may be the sentinel.
    pub(crate) fn transplant(&mut self, node: Ref, with: Ref) {
        let parent = self[node].parent;
        self[with].parent = parent;
        if parent.is_sentinel() {
            self.root = with;
        } else {
            let parent = &mut self[parent];
            let dir = if parent.children[LEFT] == node { LEFT } else { RIGHT };
            parent.children[dir] = with;
        }
    }

    /// Rotates `x` down towards `dir`
    ///
    /// The child of `x` on the other side takes its place and must not be
    /// the sentinel. `rotate(x, LEFT)` is the classical left rotation.
    pub(crate) fn rotate(&mut self, x: Ref, dir: usize) {
        debug_assert!(dir == LEFT || dir == RIGHT);
        let dir = dir & 1;
        let y = self[x].children[dir ^ 1];
        debug_assert!(!y.is_sentinel(), "rotating towards a missing child");

        self[x].children[dir ^ 1] = self[y].children[dir];
        let y_child = self[y].children[dir];
        if !y_child.is_sentinel() {
            self[y_child].parent = x;
        }
        self.transplant(x, y);
        self[y].children[dir] = x;
        self[x].parent = y;
        log::trace!("rotate {:?} towards {}", x.0, dir);
    }

    /// Returns the outermost node on the `dir` side of the subtree at `this`
    pub(crate) fn edge(&self, mut this: Ref, dir: usize) -> Ref {
        let mut node = self[this].children[dir];
        while !node.is_sentinel() {
            this = node;
            node = self[this].children[dir];
        }
        this
    }

    /// In-order neighbor of `this`: successor for `RIGHT`, predecessor for `LEFT`
    ///
    /// Returns the sentinel when `this` is the last node in that direction.
    pub(crate) fn next(&self, mut this: Ref, dir: usize) -> Ref {
        let child = self[this].children[dir];
        if !child.is_sentinel() {
            return self.edge(child, dir ^ 1);
        }
        let mut y = self[this].parent;
        while !y.is_sentinel() && this == self[y].children[dir] {
            this = y;
            y = self[y].parent;
        }
        y
    }
}

impl<K: fmt::Debug> fmt::Debug for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
