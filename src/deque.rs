//! Double-ended queue over a sentinel-rooted ring.
//!
//! [`Deque`] is the public handle. It owns a [`Ring`] and forwards every
//! operation to it; the ring's sentinel is what lets head and tail
//! operations run without checking for emptiness first.
//!
//! # Examples
//!
//! ```rust
//! use sentinel_deque::Deque;
//!
//! let mut deque: Deque<&str> = ["abc", "bcd", "cde", "def"].into();
//!
//! let found = deque.find(|element| *element == "cde");
//! assert_eq!(deque.find_data(found), Ok(&"cde"));
//!
//! let missing = deque.find(|element| *element == "xyz");
//! assert!(deque.is_sentinel(missing));
//!
//! assert_eq!(deque.remove_from_head(), Ok("abc"));
//! assert_eq!(deque.size(), 3);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::error::{DequeError, EmptyDequeError, StaleNodeError};
use crate::ring::{IntoIter, Iter, NodeRef, Nodes, Ring};

/// A double-ended queue built as a circular doubly linked list with a
/// sentinel node.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `add_at_head` / `add_at_tail` | O(1) amortized |
/// | `remove_from_head` / `remove_from_tail` | O(1) |
/// | `remove_node` | O(1) |
/// | `front` / `back` | O(1) |
/// | `find` | O(n) |
/// | `size` | O(n) |
/// | `len` | O(1) |
///
/// # Examples
///
/// ```rust
/// use sentinel_deque::Deque;
///
/// let mut deque = Deque::new();
/// deque.add_at_tail(2);
/// deque.add_at_head(1);
/// deque.add_at_tail(3);
///
/// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(deque.remove_from_tail(), Ok(3));
/// ```
pub struct Deque<T> {
    ring: Ring<T>,
}

impl<T> Deque<T> {
    /// Creates an empty deque with a fresh sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self { ring: Ring::new() }
    }

    /// Creates an empty deque with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ring: Ring::with_capacity(capacity),
        }
    }

    /// Wraps a ring the caller has already built.
    ///
    /// Node handles minted by `ring` remain valid for the resulting deque.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sentinel_deque::{Deque, Ring};
    ///
    /// let mut ring = Ring::new();
    /// let node = ring.add_at_tail(4);
    /// ring.add_at_tail(3);
    ///
    /// let deque = Deque::from_ring(ring);
    /// assert_eq!(deque.size(), 2);
    /// assert_eq!(deque.find_data(node), Ok(&4));
    /// ```
    #[must_use]
    pub const fn from_ring(ring: Ring<T>) -> Self {
        Self { ring }
    }

    /// Unwraps the deque into its ring.
    #[must_use]
    pub fn into_ring(self) -> Ring<T> {
        self.ring
    }

    /// Returns the underlying ring for node-level operations.
    #[inline]
    #[must_use]
    pub const fn ring(&self) -> &Ring<T> {
        &self.ring
    }

    /// Returns the underlying ring mutably.
    #[inline]
    #[must_use]
    pub const fn ring_mut(&mut self) -> &mut Ring<T> {
        &mut self.ring
    }

    /// Returns the handle of the sentinel.
    #[inline]
    #[must_use]
    pub fn sentinel(&self) -> NodeRef {
        self.ring.sentinel()
    }

    /// Counts the elements by walking the ring from the sentinel. O(n).
    ///
    /// Always equal to [`len`](Self::len).
    #[must_use]
    pub fn size(&self) -> usize {
        self.ring.count_nodes(self.ring.sentinel())
    }

    /// Returns the number of elements. O(1).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns how many elements fit before the arena reallocates.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Inserts `value` at the front and returns its handle.
    pub fn add_at_head(&mut self, value: T) -> NodeRef {
        self.ring.add_at_head(value)
    }

    /// Inserts `value` at the back and returns its handle.
    pub fn add_at_tail(&mut self, value: T) -> NodeRef {
        self.ring.add_at_tail(value)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDequeError`] if the deque is empty.
    pub fn remove_from_head(&mut self) -> Result<T, EmptyDequeError> {
        self.ring.remove_from_head()
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDequeError`] if the deque is empty.
    pub fn remove_from_tail(&mut self) -> Result<T, EmptyDequeError> {
        self.ring.remove_from_tail()
    }

    /// Returns a reference to the first element, if any.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.ring.front()
    }

    /// Returns a reference to the last element, if any.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.ring.back()
    }

    /// Returns the first node, head to tail, whose data satisfies
    /// `predicate`.
    ///
    /// When nothing matches the sentinel is returned rather than `None`, so
    /// the result can be navigated further without a check; use
    /// [`is_sentinel`](Self::is_sentinel) to tell the two apart.
    pub fn find<P>(&self, predicate: P) -> NodeRef
    where
        P: FnMut(&T) -> bool,
    {
        self.ring.find(predicate)
    }

    /// Splices `node` out of the deque and returns its data.
    ///
    /// Passing the sentinel is a no-op that returns `None`. So is passing a
    /// handle that was already removed or that belongs to another deque.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sentinel_deque::Deque;
    ///
    /// let mut deque: Deque<char> = ['a', 'b', 'c'].into();
    /// let b = deque.find(|element| *element == 'b');
    ///
    /// assert_eq!(deque.remove_node(b), Some('b'));
    /// assert_eq!(deque.remove_node(deque.sentinel()), None);
    /// assert_eq!(deque.iter().collect::<String>(), "ac");
    /// ```
    pub fn remove_node(&mut self, node: NodeRef) -> Option<T> {
        self.ring.remove_node(node)
    }

    /// Inserts `value` right after `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`StaleNodeError`] if `anchor` is not a live node of this
    /// deque.
    pub fn insert_after(&mut self, anchor: NodeRef, value: T) -> Result<NodeRef, StaleNodeError> {
        self.ring.insert_after(anchor, value)
    }

    /// Inserts `value` right before `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`StaleNodeError`] if `anchor` is not a live node of this
    /// deque.
    pub fn insert_before(
        &mut self,
        anchor: NodeRef,
        value: T,
    ) -> Result<NodeRef, StaleNodeError> {
        self.ring.insert_before(anchor, value)
    }

    /// Returns `true` only for this deque's sentinel.
    #[must_use]
    pub fn is_sentinel(&self, node: NodeRef) -> bool {
        self.ring.is_sentinel(node)
    }

    /// Returns the data stored in `node`.
    ///
    /// # Errors
    ///
    /// See [`Ring::find_data`].
    pub fn find_data(&self, node: NodeRef) -> Result<&T, DequeError> {
        self.ring.find_data(node)
    }

    /// Returns the data stored in `node` mutably.
    ///
    /// # Errors
    ///
    /// See [`Ring::find_data`].
    pub fn find_data_mut(&mut self, node: NodeRef) -> Result<&mut T, DequeError> {
        self.ring.find_data_mut(node)
    }

    /// Returns the node after `node`; never fails.
    #[must_use]
    pub fn find_next(&self, node: NodeRef) -> NodeRef {
        self.ring.find_next(node)
    }

    /// Returns the node before `node`; never fails.
    #[must_use]
    pub fn find_prev(&self, node: NodeRef) -> NodeRef {
        self.ring.find_prev(node)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.ring.clear();
    }

    /// Creates an iterator over references to the elements, head to tail.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.ring.iter()
    }

    /// Creates an iterator over the element handles, head to tail.
    #[must_use]
    pub fn nodes(&self) -> Nodes<'_, T> {
        self.ring.nodes()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        Self {
            ring: self.ring.clone(),
        }
    }
}

impl<T> From<Ring<T>> for Deque<T> {
    fn from(ring: Ring<T>) -> Self {
        Self::from_ring(ring)
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            ring: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.ring.extend(iter);
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ring.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Deque<i32>: Send, Sync, Default, Clone);
static_assertions::assert_impl_all!(Deque<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
