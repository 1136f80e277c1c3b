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

use crate::error::TreeError;
use crate::node::{NodeHandle, Ref, LEFT, RIGHT};
use crate::tree::RbTree;

impl<K> RbTree<K> {
    /// Removes the node behind `handle` and returns its key
    ///
    /// Fails with [TreeError::InvalidHandle] if the handle belongs to another
    /// tree or its node has already been erased. The tree is untouched then.
    pub fn erase(&mut self, handle: NodeHandle) -> Result<K, TreeError> {
        match self.resolve(handle) {
            Some(z) => Ok(self.erase_at(z)),
            None => {
                log::debug!("rejecting erase of {:?}", handle);
                Err(TreeError::InvalidHandle)
            }
        }
    }

    pub(crate) fn erase_at(&mut self, z: Ref) -> K {
        let [zl, zr] = self[z].children;
        // color of the node that physically leaves its position
        let mut y_red = self[z].red;
        let x;

        if zl.is_sentinel() {
            x = zr;
            self.transplant(z, zr);
        } else if zr.is_sentinel() {
            x = zl;
            self.transplant(z, zl);
        } else {
            // the successor has no left child
            let y = self.edge(zr, LEFT);
            y_red = self[y].red;
            x = self[y].children[RIGHT];
            if y != zr {
                self.transplant(y, x);
                self[y].children[RIGHT] = zr;
                self[zr].parent = y;
            } else {
                // x may be the sentinel, whose parent the fixup reads
                self[x].parent = y;
            }
            self.transplant(z, y);
            self[y].children[LEFT] = zl;
            self[zl].parent = y;
            self[y].red = self[z].red;
        }

        let key = self.slab.remove(z.0).key;
        if !y_red {
            self.delete_fixup(x);
        }
        self.reset_sentinel();
        key
    }

    fn delete_fixup(&mut self, mut x: Ref) {
        while x != self.root && !self[x].red {
            let p = self[x].parent;
            // side of the sibling; x lost one black on the other side
            let dir = if x == self[p].children[LEFT] { RIGHT } else { LEFT };
            let mut w = self[p].children[dir];
            if self[w].red {
                log::trace!("delete fixup: red sibling {}", w.0);
                self[w].red = false;
                self[p].red = true;
                self.rotate(p, dir ^ 1);

                // recompute w after the rotation of p
                w = self[p].children[dir];
            }
            let wl = self[w].children[LEFT];
            let wr = self[w].children[RIGHT];
            if !self[wl].red && !self[wr].red {
                log::trace!("delete fixup: black nephews, moving up to {}", p.0);
                self[w].red = true;
                x = p;
            } else {
                let mut wc = self[w].children[dir]; // far nephew
                let wo = self[w].children[dir ^ 1]; // near nephew
                if !self[wc].red {
                    log::trace!("delete fixup: red near nephew {}", wo.0);
                    self[wo].red = false;
                    self[w].red = true;
                    self.rotate(w, dir);
                    w = self[p].children[dir];

                    // recompute wc after the rotation of w
                    wc = self[w].children[dir];
                }
                log::trace!("delete fixup: red far nephew {}", wc.0);
                self[w].red = self[p].red;
                self[p].red = false;
                self[wc].red = false;
                self.rotate(p, dir ^ 1);
                x = self.root;
            }
        }

        // blacken x
        self[x].red = false;
    }
}

impl<K: Ord> RbTree<K> {
    /// Removes one node holding `key`, if any, and returns the stored key
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let z = self.search(key)?;
        Some(self.erase_at(z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Color, Side};

    #[test]
    fn test_erase_root() {
        let mut rb = RbTree::new();
        let p = rb.insert(128);
        assert_eq!(rb.root(), Some(p));

        assert_eq!(rb.erase(p), Ok(128));
        assert!(rb.is_empty());
        assert_eq!(rb.root(), None);
        assert_eq!(rb.min(), None);
        assert_eq!(rb.max(), None);
        assert_eq!(rb.validate(), Ok(0));
    }

    #[test]
    fn test_erase_twice_is_rejected() {
        let mut rb = RbTree::new();
        let p = rb.insert(1);
        rb.insert(2);
        assert_eq!(rb.erase(p), Ok(1));
        assert_eq!(rb.erase(p), Err(TreeError::InvalidHandle));
        // slot reuse must not revive the old handle
        let q = rb.insert(3);
        assert_eq!(q.index, p.index);
        assert_eq!(rb.erase(p), Err(TreeError::InvalidHandle));
        assert_eq!(rb.len(), 2);
        rb.validate().unwrap();
    }

    #[test]
    fn test_erase_with_successor_as_right_child() {
        let mut rb = RbTree::new();
        let root = rb.insert(10);
        rb.insert(5);
        rb.insert(15);

        assert_eq!(rb.erase(root), Ok(10));
        let root = rb.root().unwrap();
        assert_eq!(rb.key(root), Some(&15));
        assert_eq!(rb.color(root), Some(Color::Black));
        let l = rb.child(root, Side::Left).unwrap();
        assert_eq!((rb.key(l), rb.color(l)), (Some(&5), Some(Color::Red)));
        assert_eq!(rb.child(root, Side::Right), None);
        rb.validate().unwrap();
    }

    #[test]
    fn test_erase_with_deep_successor() {
        let mut rb: RbTree<i32> = [20, 10, 30, 25, 40].into_iter().collect();
        let z = rb.find(&20).unwrap();
        assert_eq!(rb.root(), Some(z));

        assert_eq!(rb.erase(z), Ok(20));
        let root = rb.root().unwrap();
        assert_eq!(rb.key(root), Some(&25));
        let r = rb.child(root, Side::Right).unwrap();
        assert_eq!(rb.key(r), Some(&30));
        assert_eq!(rb.parent(r), Some(root));
        rb.validate().unwrap();
        assert_eq!(rb.iter().copied().collect::<Vec<_>>(), [10, 25, 30, 40]);
    }

    #[test]
    fn test_erase_scenario() {
        let mut rb = RbTree::new();
        let mut ten = None;
        for k in [10, 5, 8, 34, 67, 23, 156, 24, 2, 12] {
            let h = rb.insert(k);
            if k == 10 {
                ten = Some(h);
            }
        }
        assert_eq!(
            rb.to_sorted_vec(10).unwrap(),
            [2, 5, 8, 10, 12, 23, 24, 34, 67, 156]
        );

        assert_eq!(rb.erase(ten.unwrap()), Ok(10));
        assert_eq!(
            rb.to_sorted_vec(9).unwrap(),
            [2, 5, 8, 12, 23, 24, 34, 67, 156]
        );
        assert_eq!(rb.find(&10), None);
        rb.validate().unwrap();
    }

    #[test]
    fn test_erase_keeps_duplicates_findable() {
        let mut rb = RbTree::new();
        let a = rb.insert(7);
        rb.insert(3);
        let b = rb.insert(7);
        assert_eq!(rb.erase(a), Ok(7));
        assert!(rb.contains(&7));
        assert_eq!(rb.erase(b), Ok(7));
        assert!(!rb.contains(&7));
        rb.validate().unwrap();
    }

    #[test]
    fn test_find_erase_fixed() {
        let arr = [10, 5, 8, 34, 67, 23, 156, 24, 2, 12, 24, 36, 990, 25];
        let mut rb = RbTree::new();
        for k in arr {
            rb.insert(k);
        }

        for k in arr {
            let p = rb.find(&k).unwrap();
            assert_eq!(rb.key(p), Some(&k));
            rb.erase(p).unwrap();
            rb.validate().unwrap();
        }
        for k in arr {
            assert_eq!(rb.find(&k), None);
        }

        for k in arr {
            let p = rb.insert(k);
            let q = rb.find(&k).unwrap();
            assert_eq!(p, q);
            rb.erase(p).unwrap();
            assert_eq!(rb.find(&k), None);
        }
        assert!(rb.is_empty());
    }

    #[test]
    fn test_remove_by_key() {
        let mut rb: RbTree<i32> = (0..64).collect();
        assert_eq!(rb.remove(&100), None);
        for k in (0..64).step_by(2) {
            assert_eq!(rb.remove(&k), Some(k));
            rb.validate().unwrap();
        }
        assert_eq!(rb.len(), 32);
        assert!(rb.iter().all(|k| k % 2 == 1));
    }

    #[test]
    fn test_many_insert_some_delete() {
        let mut rb: RbTree<i32> = RbTree::new();

        for i in 50000..100000 {
            rb.insert(i);
            rb.insert(100000 - i);
        }
        rb.validate().unwrap();

        for k in [5, 50, 500, 5000, 50000] {
            assert!(rb.contains(&k));
            assert_eq!(rb.remove(&k), Some(k));
            rb.validate().unwrap();
            if k == 50000 {
                // 50000 was inserted twice
                assert_eq!(rb.remove(&k), Some(k));
            }
            assert_eq!(rb.remove(&k), None);
            assert_eq!(rb.find(&k), None);
        }
    }
}
