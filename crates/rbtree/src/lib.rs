//! This crate contains a red-black tree implementation based on slab,
//! with one shared sentinel standing in for every absent link.
//!
//! To use it, create a [RbTree] and keep the [NodeHandle]s it hands out.
#![doc = include_str!("../README.md")]

#![warn(missing_docs)]

/// Errors returned by tree operations
pub mod error;
/// In-order traversal
pub mod iter;
/// Node colors, sides and handles
pub mod node;
/// The tree type
pub mod tree;

mod erase;
mod insert;
mod query;

/// Invariant checking
#[cfg(any(test, feature = "validate"))]
pub mod validate;

pub use error::TreeError;
pub use iter::Iter;
pub use node::{Color, NodeHandle, Side};
pub use tree::RbTree;
