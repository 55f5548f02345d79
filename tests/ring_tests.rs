//! Unit tests for the node-level operations of Ring.

use rstest::{fixture, rstest};
use sentinel_deque::{Deque, DequeError, EmptyDequeError, NodeRef, Ring, StaleNodeError};

// =============================================================================
// Fixtures
// =============================================================================

/// Ring `"abc" <-> "bcd" <-> "cde" <-> "def"`, plus the handles in order.
#[fixture]
fn strings() -> (Ring<&'static str>, Vec<NodeRef>) {
    let mut ring = Ring::new();
    let nodes = ["abc", "bcd", "cde", "def"]
        .into_iter()
        .map(|element| ring.add_at_tail(element))
        .collect();
    (ring, nodes)
}

fn contains_cde(element: &&str) -> bool {
    *element == "cde"
}

// =============================================================================
// count_nodes
// =============================================================================

#[rstest]
fn test_count_nodes(strings: (Ring<&'static str>, Vec<NodeRef>)) {
    let (ring, nodes) = strings;
    let empty: Ring<&str> = Ring::new();

    assert_eq!(empty.count_nodes(empty.sentinel()), 0);
    assert_eq!(ring.count_nodes(ring.sentinel()), 4);
    assert_eq!(ring.count_nodes(nodes[3]), 1);
    assert_eq!(ring.count_nodes(nodes[0]), 4);
}

// =============================================================================
// find_from
// =============================================================================

#[rstest]
fn test_find_from(strings: (Ring<&'static str>, Vec<NodeRef>)) {
    let (ring, nodes) = strings;
    let empty: Ring<&str> = Ring::new();

    assert_eq!(empty.find_from(empty.sentinel(), contains_cde), empty.sentinel());
    assert_eq!(ring.find_from(ring.sentinel(), contains_cde), ring.sentinel());
    assert_eq!(ring.find_from(nodes[3], contains_cde), ring.sentinel());
    assert_eq!(ring.find_from(nodes[1], contains_cde), nodes[2]);
    assert_eq!(ring.find_from(nodes[2], contains_cde), nodes[2]);
}

#[rstest]
fn test_find_visits_at_most_len_nodes(strings: (Ring<&'static str>, Vec<NodeRef>)) {
    let (ring, _) = strings;
    let mut calls = 0;
    let result = ring.find(|_| {
        calls += 1;
        false
    });
    assert!(ring.is_sentinel(result));
    assert_eq!(calls, ring.len());
}

// =============================================================================
// remove_node / take_node
// =============================================================================

#[rstest]
fn test_remove_node_on_sentinel_keeps_ring(strings: (Ring<&'static str>, Vec<NodeRef>)) {
    let (mut ring, nodes) = strings;
    let sentinel = ring.sentinel();

    assert_eq!(ring.remove_node(sentinel), None);
    assert_eq!(ring.find_next(sentinel), nodes[0]);
    assert_eq!(ring.find_prev(sentinel), nodes[3]);
    assert!(ring.is_consistent());

    let mut empty: Ring<&str> = Ring::new();
    let sentinel = empty.sentinel();
    assert_eq!(empty.remove_node(sentinel), None);
    assert_eq!(empty.find_next(sentinel), sentinel);
}

#[rstest]
fn test_remove_node_on_head(strings: (Ring<&'static str>, Vec<NodeRef>)) {
    let (mut ring, nodes) = strings;
    assert_eq!(ring.remove_node(nodes[0]), Some("abc"));
    assert_eq!(ring.find_next(ring.sentinel()), nodes[1]);
}

#[rstest]
fn test_take_node_fails_on_sentinel_and_stale(strings: (Ring<&'static str>, Vec<NodeRef>)) {
    let (mut ring, nodes) = strings;
    let sentinel = ring.sentinel();

    assert_eq!(ring.take_node(sentinel), Err(DequeError::Empty(EmptyDequeError)));
    assert_eq!(ring.take_node(nodes[2]), Ok("cde"));
    assert_eq!(
        ring.take_node(nodes[2]),
        Err(DequeError::StaleNode(StaleNodeError))
    );
    assert_eq!(ring.len(), 3);
}

// =============================================================================
// Wrapping
// =============================================================================

#[rstest]
fn test_handles_survive_wrapping_and_unwrapping(strings: (Ring<&'static str>, Vec<NodeRef>)) {
    let (ring, nodes) = strings;
    let mut deque = Deque::from_ring(ring);

    assert_eq!(deque.find(contains_cde), nodes[2]);
    assert_eq!(deque.remove_node(nodes[1]), Some("bcd"));

    let ring = deque.into_ring();
    assert_eq!(ring.find_next(nodes[0]), nodes[2]);
    assert!(ring.is_consistent());
}

#[rstest]
fn test_ring_mut_allows_node_level_mutation() {
    let mut deque: Deque<i32> = [1, 2, 3].into();
    let node = deque.find(|element| *element == 2);
    *deque.ring_mut().find_data_mut(node).unwrap() *= 10;
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 20, 3]);
}
