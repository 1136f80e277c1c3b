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

use crate::node::{Ref, LEFT, RIGHT, SENTINEL};
use crate::tree::RbTree;
use std::error::Error;
use std::fmt;

/// A broken tree property, as found by [RbTree::validate]
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum InvariantViolation {
    /// The root is red
    RedRoot,
    /// The sentinel is red
    RedSentinel,
    /// A red node has a red child
    RedRedEdge,
    /// Two sentinel-terminated paths cross different numbers of black nodes
    BlackHeightMismatch,
    /// A key sits on the wrong side of one of its ancestors
    OrderViolation,
    /// A child does not point back to its parent, or the root has a parent
    BrokenParentLink,
    /// The number of reachable nodes differs from the number allocated
    LengthMismatch,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            InvariantViolation::RedRoot => "root is red",
            InvariantViolation::RedSentinel => "sentinel is red",
            InvariantViolation::RedRedEdge => "red node has red children",
            InvariantViolation::BlackHeightMismatch => "black heights differ",
            InvariantViolation::OrderViolation => "keys are out of order",
            InvariantViolation::BrokenParentLink => "parent link is broken",
            InvariantViolation::LengthMismatch => "unreachable nodes in the slab",
        };
        f.write_str(msg)
    }
}

impl Error for InvariantViolation {}

struct Frame<'a, K> {
    node: Ref,
    parent: Ref,
    parent_red: bool,
    blacks: usize,
    lo: Option<&'a K>,
    hi: Option<&'a K>,
}

impl<K: Ord> RbTree<K> {
    /// Checks every red-black and search-tree property
    ///
    /// Returns the black height of the tree, counting black nodes on a path
    /// from the root down to (and excluding) the sentinel.
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        /*
         * properties
         * - root property: root is black
         * - leaf nodes (the sentinel) are black
         * - red property: children of a red node are black
         * - simple path from node to descendant leaf contains same number of black nodes
         * - search property: left keys <= key <= right keys
         */
        if self.nil.red {
            return Err(InvariantViolation::RedSentinel);
        }
        if self[self.root].red {
            return Err(InvariantViolation::RedRoot);
        }

        let mut height = None;
        let mut reached = 0usize;
        let mut stack = vec![Frame {
            node: self.root,
            parent: SENTINEL,
            parent_red: false,
            blacks: 0,
            lo: None,
            hi: None,
        }];

        while let Some(frame) = stack.pop() {
            let x = frame.node;
            if x.is_sentinel() {
                match height {
                    None => height = Some(frame.blacks),
                    Some(h) if h != frame.blacks => {
                        return Err(InvariantViolation::BlackHeightMismatch)
                    }
                    Some(_) => {}
                }
                continue;
            }
            reached += 1;

            let links = &self[x];
            if links.parent != frame.parent {
                return Err(InvariantViolation::BrokenParentLink);
            }
            if links.red && frame.parent_red {
                return Err(InvariantViolation::RedRedEdge);
            }
            let key = self.key_of(x);
            if frame.lo.is_some_and(|lo| key < lo) || frame.hi.is_some_and(|hi| key > hi) {
                return Err(InvariantViolation::OrderViolation);
            }

            let blacks = frame.blacks + usize::from(!links.red);
            stack.push(Frame {
                node: links.children[RIGHT],
                parent: x,
                parent_red: links.red,
                blacks,
                lo: Some(key),
                hi: frame.hi,
            });
            stack.push(Frame {
                node: links.children[LEFT],
                parent: x,
                parent_red: links.red,
                blacks,
                lo: frame.lo,
                hi: Some(key),
            });
        }

        if reached != self.len() {
            return Err(InvariantViolation::LengthMismatch);
        }
        Ok(height.unwrap_or(0))
    }
}
