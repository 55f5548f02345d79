//! # sentinel-deque
//!
//! A generic double-ended queue built as a circular doubly linked list
//! anchored by a sentinel node.
//!
//! ## Overview
//!
//! - **[`Deque`]**: the public handle. Constant-time insertion and removal
//!   at both ends, predicate search, and removal of an arbitrary node.
//! - **[`Ring`]**: the sentinel-rooted ring the deque delegates to. Exposes
//!   the node-level operations (navigation, per-node data access, search and
//!   removal steps) addressed by [`NodeRef`] handles.
//!
//! The sentinel is never absent: it links to itself while the ring is empty,
//! so `next`/`prev` of every node always resolve. Searches that find nothing
//! return the sentinel instead of `None`, and removing the sentinel through
//! [`Deque::remove_node`] is a harmless no-op, while removing from an empty
//! deque through [`Deque::remove_from_head`] or [`Deque::remove_from_tail`]
//! fails with [`EmptyDequeError`].
//!
//! Nodes live in an arena and link to each other by slot index, so the ring
//! has a single owner and no reference cycles.
//!
//! ## Example
//!
//! ```rust
//! use sentinel_deque::prelude::*;
//!
//! let mut deque = Deque::new();
//! deque.add_at_tail("bcd");
//! deque.add_at_head("abc");
//! deque.add_at_tail("cde");
//!
//! let node = deque.find(|element| element.starts_with('b'));
//! assert_eq!(deque.remove_node(node), Some("bcd"));
//! assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec!["abc", "cde"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use sentinel_deque::prelude::*;
/// ```
pub mod prelude {
    pub use crate::deque::Deque;
    pub use crate::error::{DequeError, EmptyDequeError, SentinelDataError, StaleNodeError};
    pub use crate::ring::{NodeRef, Ring};
}

mod deque;
mod error;
pub mod ring;

pub use deque::Deque;
pub use error::{DequeError, EmptyDequeError, SentinelDataError, StaleNodeError};
pub use ring::{NodeRef, Ring};
