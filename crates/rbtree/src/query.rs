use crate::node::{Color, NodeHandle, Ref, Side, LEFT, RIGHT};
use crate::tree::RbTree;
use std::cmp::Ordering;

impl<K: Ord> RbTree<K> {
    pub(crate) fn search(&self, key: &K) -> Option<Ref> {
        let mut curr = self.root;

        while !curr.is_sentinel() {
            let direction = match key.cmp(self.key_of(curr)) {
                Ordering::Equal => return Some(curr),
                Ordering::Less => LEFT,
                Ordering::Greater => RIGHT,
            };
            curr = self[curr].children[direction];
        }
        None
    }

    /// Finds a node holding `key`
    ///
    /// With duplicates, any one of the equal nodes may be returned.
    pub fn find(&self, key: &K) -> Option<NodeHandle> {
        self.search(key).map(|x| self.handle(x))
    }

    /// Checks if some node holds `key`
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }
}

impl<K> RbTree<K> {
    /// Returns the node with the smallest key
    pub fn min(&self) -> Option<NodeHandle> {
        self.outermost(LEFT)
    }

    /// Returns the node with the largest key
    pub fn max(&self) -> Option<NodeHandle> {
        self.outermost(RIGHT)
    }

    fn outermost(&self, dir: usize) -> Option<NodeHandle> {
        if self.root.is_sentinel() {
            return None;
        }
        Some(self.handle(self.edge(self.root, dir)))
    }

    /// Returns the root node
    pub fn root(&self) -> Option<NodeHandle> {
        self.handle_or_none(self.root)
    }

    /// Returns the key of a node, or [None] for a stale handle
    pub fn key(&self, handle: NodeHandle) -> Option<&K> {
        self.resolve(handle).map(|x| self.key_of(x))
    }

    /// Returns the color of a node
    pub fn color(&self, handle: NodeHandle) -> Option<Color> {
        self.resolve(handle).map(|x| Color::from(self[x].red))
    }

    /// Returns the parent of a node, [None] for the root
    pub fn parent(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let x = self.resolve(handle)?;
        self.handle_or_none(self[x].parent)
    }

    /// Returns a child of a node, [None] where the sentinel hangs
    pub fn child(&self, handle: NodeHandle, side: Side) -> Option<NodeHandle> {
        let x = self.resolve(handle)?;
        self.handle_or_none(self[x].children[side.dir()])
    }

    /// Returns the in-order successor of a node
    pub fn successor(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let x = self.resolve(handle)?;
        self.handle_or_none(self.next(x, RIGHT))
    }

    /// Returns the in-order predecessor of a node
    pub fn predecessor(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let x = self.resolve(handle)?;
        self.handle_or_none(self.next(x, LEFT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_single() {
        let mut rb = RbTree::new();
        let p = rb.insert(512);

        let q = rb.find(&512).unwrap();
        assert_eq!(q, p);
        assert_eq!(rb.key(q), Some(&512));
        assert_eq!(rb.find(&1024), None);
    }

    #[test]
    fn test_empty_queries() {
        let rb: RbTree<i32> = RbTree::new();
        assert_eq!(rb.find(&0), None);
        assert_eq!(rb.min(), None);
        assert_eq!(rb.max(), None);
        assert_eq!(rb.root(), None);
        assert!(!rb.contains(&0));
    }

    #[test]
    fn test_minmax() {
        let mut arr = [10, 5, 8, 34, 67, 23, 156, 24, 2, 12];
        let mut rb: RbTree<i32> = arr.into_iter().collect();
        arr.sort();
        let n = arr.len();

        let p = rb.min().unwrap();
        assert_eq!(rb.key(p), Some(&arr[0]));
        let q = rb.max().unwrap();
        assert_eq!(rb.key(q), Some(&arr[n - 1]));

        rb.erase(p).unwrap();
        let p = rb.min().unwrap();
        assert_eq!(rb.key(p), Some(&arr[1]));

        rb.erase(q).unwrap();
        let q = rb.max().unwrap();
        assert_eq!(rb.key(q), Some(&arr[n - 2]));
        rb.validate().unwrap();
    }

    #[test]
    fn test_neighbors() {
        let rb: RbTree<i32> = [10, 5, 8, 34, 67].into_iter().collect();
        let first = rb.min().unwrap();
        assert_eq!(rb.predecessor(first), None);

        let mut keys = vec![];
        let mut curr = Some(first);
        while let Some(h) = curr {
            keys.push(*rb.key(h).unwrap());
            curr = rb.successor(h);
        }
        assert_eq!(keys, [5, 8, 10, 34, 67]);

        let last = rb.max().unwrap();
        assert_eq!(rb.successor(last), None);
        let before = rb.predecessor(last).unwrap();
        assert_eq!(rb.key(before), Some(&34));
    }

    #[test]
    fn test_navigation_links_agree() {
        let rb: RbTree<i32> = (0..31).collect();
        let root = rb.root().unwrap();
        assert_eq!(rb.parent(root), None);
        for side in [Side::Left, Side::Right] {
            let c = rb.child(root, side).unwrap();
            assert_eq!(rb.parent(c), Some(root));
        }
    }
}
