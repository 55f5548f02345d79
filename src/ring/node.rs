//! Node variants and slot bookkeeping for [`Ring`](super::Ring).

use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// Ring Identity
// =============================================================================

static NEXT_RING_IDENTIFIER: AtomicU64 = AtomicU64::new(0);

/// Identifies the ring that minted a [`NodeRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct RingId(u64);

impl RingId {
    pub(crate) fn fresh() -> Self {
        Self(NEXT_RING_IDENTIFIER.fetch_add(1, Ordering::Relaxed))
    }
}

// =============================================================================
// NodeRef
// =============================================================================

/// A copyable handle to a node of a [`Ring`](super::Ring).
///
/// Handles are returned by insertion and by [`find`](crate::Deque::find).
/// They stay valid while the node is in the ring; once the node is removed
/// the handle is stale and every operation treats it as absent. A handle is
/// never valid for a ring other than the one that produced it, including a
/// clone of that ring.
///
/// # Examples
///
/// ```rust
/// use sentinel_deque::Deque;
///
/// let mut deque = Deque::new();
/// let node = deque.add_at_tail("abc");
/// assert!(!deque.is_sentinel(node));
/// assert_eq!(deque.find_data(node), Ok(&"abc"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub(crate) ring: RingId,
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeRef {
    /// Returns the arena slot this handle points at, for debugging or
    /// external bookkeeping.
    #[inline]
    #[must_use]
    pub const fn slot(&self) -> usize {
        self.index
    }
}

// =============================================================================
// Node
// =============================================================================

/// Neighbour links, stored as arena slot indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Links {
    pub(crate) next: usize,
    pub(crate) prev: usize,
}

impl Links {
    pub(crate) const fn between(prev: usize, next: usize) -> Self {
        Self { next, prev }
    }
}

/// A ring node: either the data-less sentinel or an element carrying `T`.
#[derive(Debug, Clone)]
pub(crate) enum Node<T> {
    Sentinel { links: Links },
    Element { links: Links, data: T },
}

impl<T> Node<T> {
    pub(crate) const fn links(&self) -> Links {
        match self {
            Self::Sentinel { links } | Self::Element { links, .. } => *links,
        }
    }

    pub(crate) const fn links_mut(&mut self) -> &mut Links {
        match self {
            Self::Sentinel { links } | Self::Element { links, .. } => links,
        }
    }

    pub(crate) const fn is_sentinel(&self) -> bool {
        matches!(self, Self::Sentinel { .. })
    }

    pub(crate) const fn data(&self) -> Option<&T> {
        match self {
            Self::Sentinel { .. } => None,
            Self::Element { data, .. } => Some(data),
        }
    }

    pub(crate) const fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Sentinel { .. } => None,
            Self::Element { data, .. } => Some(data),
        }
    }
}

// =============================================================================
// Slot
// =============================================================================

/// One arena cell. Vacant cells form a singly linked free list.
#[derive(Debug, Clone)]
pub(crate) enum Slot<T> {
    Occupied { generation: u32, node: Node<T> },
    Vacant { generation: u32, next_free: Option<usize> },
}

impl<T> Slot<T> {
    pub(crate) const fn generation(&self) -> u32 {
        match self {
            Self::Occupied { generation, .. } | Self::Vacant { generation, .. } => *generation,
        }
    }

    pub(crate) const fn node(&self) -> Option<&Node<T>> {
        match self {
            Self::Occupied { node, .. } => Some(node),
            Self::Vacant { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_ring_id_fresh_is_unique() {
        let first = RingId::fresh();
        let second = RingId::fresh();
        assert_ne!(first, second);
    }

    #[rstest]
    fn test_node_sentinel_has_no_data() {
        let mut node: Node<i32> = Node::Sentinel {
            links: Links::between(0, 0),
        };
        assert!(node.is_sentinel());
        assert_eq!(node.data(), None);
        assert_eq!(node.data_mut(), None);
    }

    #[rstest]
    fn test_node_element_exposes_data() {
        let mut node = Node::Element {
            links: Links::between(0, 0),
            data: 7,
        };
        assert!(!node.is_sentinel());
        if let Some(data) = node.data_mut() {
            *data += 1;
        }
        assert_eq!(node.data(), Some(&8));
    }

    #[rstest]
    fn test_links_mut_updates_both_variants() {
        let mut node = Node::Element {
            links: Links::between(1, 2),
            data: "x",
        };
        node.links_mut().next = 5;
        assert_eq!(node.links(), Links { next: 5, prev: 1 });
    }

    #[rstest]
    fn test_slot_generation_survives_vacancy() {
        let slot: Slot<i32> = Slot::Vacant {
            generation: 3,
            next_free: None,
        };
        assert_eq!(slot.generation(), 3);
        assert!(slot.node().is_none());
    }
}
