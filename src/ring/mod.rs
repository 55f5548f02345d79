//! Sentinel-rooted circular doubly linked ring.
//!
//! A [`Ring`] stores its nodes in an arena. Slot 0 always holds the sentinel,
//! which carries no data and links to itself while the ring is empty. Every
//! other occupied slot holds an element node. Links between nodes are plain
//! slot indices, so the arena is the only owner and the cyclic structure
//! needs no reference counting.
//!
//! Because `next`/`prev` of every node always resolve, at worst to the
//! sentinel, head and tail operations never special-case the empty ring:
//! inserting at the head is "insert between the sentinel and its successor",
//! and removing from an empty ring is simply removing the sentinel, which is
//! refused.
//!
//! # Examples
//!
//! ```rust
//! use sentinel_deque::Ring;
//!
//! let mut ring = Ring::new();
//! let first = ring.add_at_tail("abc");
//! let third = ring.add_at_tail("cde");
//! let second = ring.insert_before(third, "bcd").unwrap();
//!
//! assert_eq!(ring.find_next(first), second);
//! assert_eq!(ring.find_prev(first), ring.sentinel());
//! assert_eq!(ring.count_nodes(second), 2);
//! assert!(ring.is_consistent());
//! ```

mod iter;
mod node;

use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::error::{DequeError, EmptyDequeError, SentinelDataError, StaleNodeError};

pub use iter::{IntoIter, Iter, Nodes};
pub use node::NodeRef;

use node::{Links, Node, RingId, Slot};

/// Arena slot reserved for the sentinel.
const SENTINEL: usize = 0;

/// A circular doubly linked ring of nodes anchored by a sentinel.
///
/// `Ring` exposes the node-level operations: navigation, per-node data
/// access, predicate search from an arbitrary node, and the two removal
/// flavours. [`Deque`](crate::Deque) wraps a `Ring` and offers the
/// collection-level surface on top of it.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `add_at_head` / `add_at_tail` | O(1) amortized |
/// | `insert_after` / `insert_before` | O(1) amortized |
/// | `remove_from_head` / `remove_from_tail` | O(1) |
/// | `remove_node` / `take_node` | O(1) |
/// | `find_next` / `find_prev` / `find_data` | O(1) |
/// | `count_nodes` / `find_from` | O(n) |
/// | `len` | O(1) |
pub struct Ring<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    length: usize,
    identifier: RingId,
}

impl<T> Ring<T> {
    /// Creates an empty ring holding only the sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty ring with room for `capacity` elements before the
    /// arena reallocates. This is a preallocation hint, not a bound.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity.saturating_add(1));
        slots.push(Slot::Occupied {
            generation: 0,
            node: Node::Sentinel {
                links: Links::between(SENTINEL, SENTINEL),
            },
        });
        Self {
            slots,
            free_head: None,
            length: 0,
            identifier: RingId::fresh(),
        }
    }

    /// Returns the number of element nodes. O(1).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the sentinel is its own neighbour.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns how many elements fit before the arena reallocates.
    ///
    /// Slots vacated by removals stay allocated and are reused by later
    /// insertions, so capacity never drops below the largest size reached.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity() - 1
    }

    /// Returns the handle of the sentinel.
    #[inline]
    #[must_use]
    pub fn sentinel(&self) -> NodeRef {
        self.reference(SENTINEL)
    }

    // =========================================================================
    // Head / Tail
    // =========================================================================

    /// Inserts `value` immediately after the sentinel.
    pub fn add_at_head(&mut self, value: T) -> NodeRef {
        let head = self.node_at(SENTINEL).links().next;
        self.insert_between(SENTINEL, head, value)
    }

    /// Inserts `value` immediately before the sentinel.
    pub fn add_at_tail(&mut self, value: T) -> NodeRef {
        let tail = self.node_at(SENTINEL).links().prev;
        self.insert_between(tail, SENTINEL, value)
    }

    /// Removes the first element and returns its data.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDequeError`] if the ring has no elements.
    pub fn remove_from_head(&mut self) -> Result<T, EmptyDequeError> {
        let head = self.node_at(SENTINEL).links().next;
        self.take_at(head)
    }

    /// Removes the last element and returns its data.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDequeError`] if the ring has no elements.
    pub fn remove_from_tail(&mut self) -> Result<T, EmptyDequeError> {
        let tail = self.node_at(SENTINEL).links().prev;
        self.take_at(tail)
    }

    /// Returns a reference to the first element, if any.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.node_at(self.node_at(SENTINEL).links().next).data()
    }

    /// Returns a reference to the last element, if any.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.node_at(self.node_at(SENTINEL).links().prev).data()
    }

    /// Returns the first element, head to tail, satisfying `predicate`, or
    /// the sentinel if none does.
    pub fn find<P>(&self, predicate: P) -> NodeRef
    where
        P: FnMut(&T) -> bool,
    {
        let head = self.node_at(SENTINEL).links().next;
        self.search_from(head, predicate)
    }

    // =========================================================================
    // Node Operations
    // =========================================================================

    /// Returns `true` only for this ring's sentinel.
    ///
    /// Stale or foreign handles are not the sentinel.
    #[must_use]
    pub fn is_sentinel(&self, node: NodeRef) -> bool {
        self.resolve(node)
            .is_some_and(|index| self.node_at(index).is_sentinel())
    }

    /// Returns the data stored in `node`.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::SentinelData`] for the sentinel and
    /// [`DequeError::StaleNode`] for a removed or foreign node.
    pub fn find_data(&self, node: NodeRef) -> Result<&T, DequeError> {
        let index = self.resolve(node).ok_or(StaleNodeError)?;
        self.node_at(index)
            .data()
            .ok_or(DequeError::SentinelData(SentinelDataError))
    }

    /// Returns a mutable reference to the data stored in `node`.
    ///
    /// # Errors
    ///
    /// Same as [`find_data`](Self::find_data).
    pub fn find_data_mut(&mut self, node: NodeRef) -> Result<&mut T, DequeError> {
        let index = self.resolve(node).ok_or(StaleNodeError)?;
        self.node_at_mut(index)
            .data_mut()
            .ok_or(DequeError::SentinelData(SentinelDataError))
    }

    /// Returns the node following `node`. Never fails: the sentinel's
    /// successor is the head, or the sentinel itself when empty. A stale
    /// handle resolves to the sentinel.
    #[must_use]
    pub fn find_next(&self, node: NodeRef) -> NodeRef {
        let next = self
            .resolve(node)
            .map_or(SENTINEL, |index| self.node_at(index).links().next);
        self.reference(next)
    }

    /// Returns the node preceding `node`. Never fails; see
    /// [`find_next`](Self::find_next).
    #[must_use]
    pub fn find_prev(&self, node: NodeRef) -> NodeRef {
        let prev = self
            .resolve(node)
            .map_or(SENTINEL, |index| self.node_at(index).links().prev);
        self.reference(prev)
    }

    /// Counts element nodes from `node` forward until the sentinel.
    ///
    /// An element counts itself, so the last element yields 1. Started on
    /// the sentinel, this counts the whole ring. A stale handle yields 0.
    #[must_use]
    pub fn count_nodes(&self, node: NodeRef) -> usize {
        let Some(start) = self.resolve(node) else {
            return 0;
        };
        let mut current = match self.node_at(start) {
            Node::Sentinel { links } => links.next,
            Node::Element { .. } => start,
        };
        let mut count = 0;
        while let Node::Element { links, .. } = self.node_at(current) {
            count += 1;
            current = links.next;
        }
        count
    }

    /// Runs the predicate search step starting at `node`.
    ///
    /// An element tests its own data and, on a miss, hands the search to its
    /// successor. The sentinel ends the search and returns itself, so this
    /// always terminates within `len() + 1` steps. Starting on the sentinel
    /// returns the sentinel immediately; a stale handle does the same.
    pub fn find_from<P>(&self, node: NodeRef, predicate: P) -> NodeRef
    where
        P: FnMut(&T) -> bool,
    {
        match self.resolve(node) {
            Some(index) => self.search_from(index, predicate),
            None => self.sentinel(),
        }
    }

    /// Inserts `value` right after `anchor`. The anchor may be the sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`StaleNodeError`] if `anchor` is not a live node of this ring.
    pub fn insert_after(&mut self, anchor: NodeRef, value: T) -> Result<NodeRef, StaleNodeError> {
        let prev = self.resolve(anchor).ok_or(StaleNodeError)?;
        let next = self.node_at(prev).links().next;
        Ok(self.insert_between(prev, next, value))
    }

    /// Inserts `value` right before `anchor`. The anchor may be the sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`StaleNodeError`] if `anchor` is not a live node of this ring.
    pub fn insert_before(
        &mut self,
        anchor: NodeRef,
        value: T,
    ) -> Result<NodeRef, StaleNodeError> {
        let next = self.resolve(anchor).ok_or(StaleNodeError)?;
        let prev = self.node_at(next).links().prev;
        Ok(self.insert_between(prev, next, value))
    }

    /// Splices `node` out of the ring and returns its data, refusing the
    /// sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::Empty`] for the sentinel and
    /// [`DequeError::StaleNode`] for a removed or foreign node.
    pub fn take_node(&mut self, node: NodeRef) -> Result<T, DequeError> {
        let index = self.resolve(node).ok_or(StaleNodeError)?;
        self.take_at(index).map_err(DequeError::from)
    }

    /// Splices `node` out of the ring and returns its data.
    ///
    /// The sentinel, and any stale or foreign handle, is left alone and
    /// yields `None`; the ring is never corrupted.
    pub fn remove_node(&mut self, node: NodeRef) -> Option<T> {
        let index = self.resolve(node)?;
        self.take_at(index).ok()
    }

    /// Removes every element, leaving only the sentinel. O(len).
    ///
    /// Handles to the removed elements become stale. The vacated slots are
    /// kept for reuse; the arena itself never shrinks.
    pub fn clear(&mut self) {
        let mut current = self.node_at(SENTINEL).links().next;
        while current != SENTINEL {
            let next = self.node_at(current).links().next;
            self.release(current);
            current = next;
        }
        *self.node_at_mut(SENTINEL).links_mut() = Links::between(SENTINEL, SENTINEL);
        self.length = 0;
        debug_assert!(self.is_consistent());
    }

    /// Returns an iterator over the elements, head to tail.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        let Links { next, prev } = self.node_at(SENTINEL).links();
        Iter::new(self, next, prev, self.length)
    }

    /// Returns an iterator over the element handles, head to tail.
    #[must_use]
    pub fn nodes(&self) -> Nodes<'_, T> {
        let Links { next, prev } = self.node_at(SENTINEL).links();
        Nodes::new(self, next, prev, self.length)
    }

    /// Checks the ring invariants: slot 0 is the only sentinel, every
    /// occupied slot is reachable from it exactly once, and for every node
    /// `n`, `n.next.prev == n` and `n.prev.next == n`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let occupied = self
            .slots
            .iter()
            .filter(|slot| slot.node().is_some())
            .count();
        if occupied != self.length + 1 {
            return false;
        }

        let mut current = SENTINEL;
        for step in 0..=self.length {
            let Some(node) = self.slots.get(current).and_then(Slot::node) else {
                return false;
            };
            if node.is_sentinel() != (step == 0) {
                return false;
            }
            let Links { next, prev } = node.links();
            let next_back = self
                .slots
                .get(next)
                .and_then(Slot::node)
                .map(|neighbour| neighbour.links().prev);
            let prev_forward = self
                .slots
                .get(prev)
                .and_then(Slot::node)
                .map(|neighbour| neighbour.links().next);
            if next_back != Some(current) || prev_forward != Some(current) {
                return false;
            }
            current = next;
        }
        current == SENTINEL
    }

    // =========================================================================
    // Arena Internals
    // =========================================================================

    fn reference(&self, index: usize) -> NodeRef {
        NodeRef {
            ring: self.identifier,
            index,
            generation: self.slots[index].generation(),
        }
    }

    fn resolve(&self, node: NodeRef) -> Option<usize> {
        if node.ring != self.identifier {
            return None;
        }
        match self.slots.get(node.index)? {
            Slot::Occupied { generation, .. } if *generation == node.generation => {
                Some(node.index)
            }
            _ => None,
        }
    }

    fn node_at(&self, index: usize) -> &Node<T> {
        match &self.slots[index] {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!("ring link points at vacant slot {index}"),
        }
    }

    fn node_at_mut(&mut self, index: usize) -> &mut Node<T> {
        match &mut self.slots[index] {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!("ring link points at vacant slot {index}"),
        }
    }

    fn search_from<P>(&self, start: usize, mut predicate: P) -> NodeRef
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = start;
        loop {
            match self.node_at(current) {
                Node::Sentinel { .. } => return self.reference(current),
                Node::Element { data, .. } if predicate(data) => {
                    return self.reference(current);
                }
                Node::Element { links, .. } => current = links.next,
            }
        }
    }

    fn insert_between(&mut self, prev: usize, next: usize, data: T) -> NodeRef {
        debug_assert_eq!(self.node_at(prev).links().next, next);
        debug_assert_eq!(self.node_at(next).links().prev, prev);

        let index = self.allocate(Node::Element {
            links: Links::between(prev, next),
            data,
        });
        self.node_at_mut(prev).links_mut().next = index;
        self.node_at_mut(next).links_mut().prev = index;
        self.length += 1;
        debug_assert!(self.is_consistent());
        self.reference(index)
    }

    /// Strict removal step: the sentinel refuses, an element splices out.
    fn take_at(&mut self, index: usize) -> Result<T, EmptyDequeError> {
        if self.node_at(index).is_sentinel() {
            return Err(EmptyDequeError);
        }

        let Links { next, prev } = self.node_at(index).links();
        self.node_at_mut(prev).links_mut().next = next;
        self.node_at_mut(next).links_mut().prev = prev;
        self.length -= 1;

        let data = match self.release(index) {
            Node::Element { data, .. } => data,
            Node::Sentinel { .. } => unreachable!("the sentinel is never released"),
        };
        debug_assert!(self.is_consistent());
        Ok(data)
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        let Some(index) = self.free_head else {
            self.slots.push(Slot::Occupied {
                generation: 0,
                node,
            });
            return self.slots.len() - 1;
        };

        let (generation, next_free) = match self.slots[index] {
            Slot::Vacant {
                generation,
                next_free,
            } => (generation, next_free),
            Slot::Occupied { .. } => unreachable!("free list points at occupied slot {index}"),
        };
        self.free_head = next_free;
        self.slots[index] = Slot::Occupied { generation, node };
        index
    }

    /// Vacates `index` and bumps its generation so existing handles go stale.
    ///
    /// A slot whose generation is exhausted is retired: it stays vacant and
    /// never rejoins the free list, so no handle it minted can resolve again.
    fn release(&mut self, index: usize) -> Node<T> {
        debug_assert_ne!(index, SENTINEL);
        let vacant = match self.slots[index].generation().checked_add(1) {
            Some(generation) => {
                let vacant = Slot::Vacant {
                    generation,
                    next_free: self.free_head,
                };
                self.free_head = Some(index);
                vacant
            }
            None => Slot::Vacant {
                generation: u32::MAX,
                next_free: None,
            },
        };
        let slot = mem::replace(&mut self.slots[index], vacant);
        match slot {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!("slot {index} released twice"),
        }
    }
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Ring<T> {
    /// Clones every node into a new ring with its own identity, so handles
    /// from `self` are foreign to the clone.
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            free_head: self.free_head,
            length: self.length,
            identifier: RingId::fresh(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Ring<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Ring<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Self::new();
        ring.extend(iter);
        ring
    }
}

impl<T> Extend<T> for Ring<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_at_tail(element);
        }
    }
}

impl<T> IntoIterator for Ring<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Ring<i32>: Send, Sync, Default);
static_assertions::assert_impl_all!(NodeRef: Copy, Send, Sync);

// =============================================================================
// Tests
// =============================================================================
