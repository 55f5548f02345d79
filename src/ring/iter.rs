//! Iterators over a [`Ring`].

use std::iter::FusedIterator;

use super::{NodeRef, Ring};

/// Borrowing iterator over ring elements, head to tail.
///
/// Created by [`Ring::iter`] and [`Deque::iter`](crate::Deque::iter).
pub struct Iter<'a, T> {
    ring: &'a Ring<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) const fn new(ring: &'a Ring<T>, front: usize, back: usize, remaining: usize) -> Self {
        Self {
            ring,
            front,
            back,
            remaining,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            ring: self.ring,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.ring.node_at(self.front);
        self.front = node.links().next;
        self.remaining -= 1;
        node.data()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.ring.node_at(self.back);
        self.back = node.links().prev;
        self.remaining -= 1;
        node.data()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over the handles of ring elements, head to tail.
///
/// The sentinel is never yielded. Created by [`Ring::nodes`] and
/// [`Deque::nodes`](crate::Deque::nodes).
pub struct Nodes<'a, T> {
    ring: &'a Ring<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Nodes<'a, T> {
    pub(super) const fn new(ring: &'a Ring<T>, front: usize, back: usize, remaining: usize) -> Self {
        Self {
            ring,
            front,
            back,
            remaining,
        }
    }
}

impl<T> Iterator for Nodes<'_, T> {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front;
        self.front = self.ring.node_at(current).links().next;
        self.remaining -= 1;
        Some(self.ring.reference(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Nodes<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.back;
        self.back = self.ring.node_at(current).links().prev;
        self.remaining -= 1;
        Some(self.ring.reference(current))
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}

impl<T> FusedIterator for Nodes<'_, T> {}

/// Owning iterator that drains a ring from the head.
pub struct IntoIter<T> {
    ring: Ring<T>,
}

impl<T> IntoIter<T> {
    pub(super) const fn new(ring: Ring<T>) -> Self {
        Self { ring }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.ring.remove_from_head().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len(), Some(self.ring.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ring.remove_from_tail().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_iter_meets_in_the_middle() {
        let ring: Ring<i32> = (1..=4).collect();
        let mut iter = ring.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[rstest]
    fn test_iter_size_hint() {
        let ring: Ring<i32> = (1..=5).collect();
        let mut iter = ring.iter();
        iter.next();
        assert_eq!(iter.size_hint(), (4, Some(4)));
        assert_eq!(iter.clone().count(), 4);
    }

    #[rstest]
    fn test_nodes_skip_sentinel() {
        let ring: Ring<i32> = (1..=3).collect();
        assert!(ring.nodes().all(|node| !ring.is_sentinel(node)));
        let data: Vec<i32> = ring
            .nodes()
            .rev()
            .map(|node| *ring.find_data(node).unwrap())
            .collect();
        assert_eq!(data, vec![3, 2, 1]);
    }

    #[rstest]
    fn test_into_iter_drains_both_ends() {
        let ring: Ring<i32> = (1..=4).collect();
        let mut iter = ring.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
    }
}
