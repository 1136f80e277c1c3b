use std::fmt;

/// A wrapper around indices returned by [slab::Slab]
///
/// The sentinel does not live in the slab. It takes the one index value
/// that a slab can never hand out.
#[derive(Eq, PartialEq, Copy, Clone)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct Ref(pub usize);
impl Ref {
    pub fn is_sentinel(&self) -> bool {
        self.0 == usize::MAX
    }
}
pub(crate) const SENTINEL: Ref = Ref(usize::MAX);

pub(crate) const LEFT: usize = 0;
pub(crate) const RIGHT: usize = 1;

/// Structural part of a node: links and color
///
/// The sentinel is a bare [Links] record, so that rotations and fixups can
/// read and write the color or parent of an absent child without branching.
#[derive(Copy, Clone)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct Links {
    pub parent: Ref,
    pub children: [Ref; 2],
    pub red: bool,
}
impl Links {
    pub const fn sentinel() -> Self {
        Self {
            parent: SENTINEL,
            children: [SENTINEL, SENTINEL],
            red: false,
        }
    }
}

pub(crate) struct Node<K> {
    pub links: Links,
    pub key: K,
    /// Per-tree insertion stamp, used to tell a live handle from a stale one
    pub stamp: u64,
}
impl<K> Node<K> {
    /// A fresh red leaf
    pub fn new(key: K, stamp: u64) -> Self {
        Self {
            links: Links {
                parent: SENTINEL,
                children: [SENTINEL, SENTINEL],
                red: true,
            },
            key,
            stamp,
        }
    }
}

/// Node color
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Color {
    /// Red node
    Red,
    /// Black node (the sentinel is always black)
    Black,
}
impl From<bool> for Color {
    fn from(red: bool) -> Self {
        if red { Color::Red } else { Color::Black }
    }
}

/// Which child of a node
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Side {
    /// The left child, holding smaller keys
    Left,
    /// The right child, holding larger or equal keys
    Right,
}
impl Side {
    pub(crate) fn dir(self) -> usize {
        match self {
            Side::Left => LEFT,
            Side::Right => RIGHT,
        }
    }
}

/// A handle to a node of a particular [crate::RbTree]
///
/// Handles stay valid until the node is erased or the tree is cleared.
/// Passing a stale handle, or one from another tree, is detected and
/// rejected rather than corrupting the tree.
#[derive(Eq, PartialEq, Hash, Copy, Clone)]
pub struct NodeHandle {
    pub(crate) tree: u64,
    pub(crate) index: usize,
    pub(crate) stamp: u64,
}
impl fmt::Debug for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeHandle({}#{}@{})", self.tree, self.index, self.stamp)
    }
}
