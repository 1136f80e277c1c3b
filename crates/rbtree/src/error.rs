use std::error::Error;
use std::fmt;

/// Errors reported by [crate::RbTree] operations
///
/// A missing key is not an error: lookups return [None] instead.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum TreeError {
    /// The handle belongs to another tree, or its node was already erased
    InvalidHandle,
    /// The output buffer cannot hold every key of the tree
    BufferTooSmall {
        /// Number of keys in the tree
        len: usize,
        /// Capacity supplied by the caller
        capacity: usize,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::InvalidHandle => write!(f, "node handle is stale or from another tree"),
            TreeError::BufferTooSmall { len, capacity } => write!(
                f,
                "buffer of capacity {} cannot hold {} keys",
                capacity, len
            ),
        }
    }
}

impl Error for TreeError {}
