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

use crate::node::{NodeHandle, Ref, LEFT, RIGHT, SENTINEL};
use crate::tree::RbTree;

impl<K: Ord> RbTree<K> {
    /// Inserts `key` and returns a handle to its node
    ///
    /// Equal keys are kept: a duplicate descends to the right of the
    /// existing ones.
    pub fn insert(&mut self, key: K) -> NodeHandle {
        let mut y = SENTINEL;
        let mut x = self.root;
        let mut dir = LEFT;

        while !x.is_sentinel() {
            y = x;
            dir = if key < *self.key_of(x) { LEFT } else { RIGHT };
            x = self[x].children[dir];
        }

        let z = self.alloc(key);
        self[z].parent = y;
        if y.is_sentinel() {
            self.root = z;
        } else {
            self[y].children[dir] = z;
        }

        self.insert_fixup(z);
        self.handle(z)
    }

    fn insert_fixup(&mut self, mut z: Ref) {
        loop {
            let mut p = self[z].parent;
            // the sentinel is black, so this also stops at the root
            if !self[p].red {
                break;
            }
            // a red parent is never the root
            let pp = self[p].parent;
            let dir = if self[pp].children[LEFT] == p { RIGHT } else { LEFT };
            let y = self[pp].children[dir];

            if self[y].red {
                log::trace!("insert fixup: red uncle at {}", pp.0);
                self[p].red = false;
                self[y].red = false;
                self[pp].red = true;
                z = pp;
            } else {
                // y is black, or nil sentinel
                if z == self[p].children[dir] {
                    log::trace!("insert fixup: inner child {}", z.0);
                    z = p;
                    self.rotate(z, dir ^ 1);
                    p = self[z].parent;
                }
                log::trace!("insert fixup: outer child {}", z.0);
                self[p].red = false;
                self[pp].red = true;
                self.rotate(pp, dir);
            }
        }

        // blacken the root
        let root = self.root;
        self[root].red = false;
    }
}

impl<K: Ord> FromIterator<K> for RbTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = RbTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RbTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
