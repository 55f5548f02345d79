//! Error types for deque and ring operations.
//!
//! Every error here signals misuse of an empty ring or of a node handle,
//! never a transient condition, so none of them are worth retrying.

/// Represents an attempt to remove an element from an empty deque.
///
/// Returned by [`Deque::remove_from_head`](crate::Deque::remove_from_head),
/// [`Deque::remove_from_tail`](crate::Deque::remove_from_tail), and by
/// [`Ring::take_node`](crate::Ring::take_node) when it is handed the sentinel.
///
/// # Examples
///
/// ```rust
/// use sentinel_deque::{Deque, EmptyDequeError};
///
/// let mut deque: Deque<i32> = Deque::new();
/// assert_eq!(deque.remove_from_head(), Err(EmptyDequeError));
/// assert_eq!(
///     format!("{}", EmptyDequeError),
///     "cannot remove a node from an empty deque"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyDequeError;

impl std::fmt::Display for EmptyDequeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("cannot remove a node from an empty deque")
    }
}

impl std::error::Error for EmptyDequeError {}

/// Represents an attempt to read data from the sentinel node.
///
/// # Examples
///
/// ```rust
/// use sentinel_deque::{Deque, DequeError, SentinelDataError};
///
/// let deque: Deque<i32> = Deque::new();
/// let sentinel = deque.sentinel();
/// assert_eq!(
///     deque.find_data(sentinel),
///     Err(DequeError::SentinelData(SentinelDataError))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SentinelDataError;

impl std::fmt::Display for SentinelDataError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("cannot read data from the sentinel node")
    }
}

impl std::error::Error for SentinelDataError {}

/// Represents a node handle that no longer refers to a live node of the ring
/// it was used with.
///
/// A [`NodeRef`](crate::NodeRef) goes stale once its node is removed, and is
/// never valid for a ring other than the one that created it.
///
/// # Examples
///
/// ```rust
/// use sentinel_deque::{Deque, DequeError, StaleNodeError};
///
/// let mut deque = Deque::new();
/// let node = deque.add_at_tail(1);
/// assert_eq!(deque.remove_node(node), Some(1));
/// assert_eq!(
///     deque.find_data(node),
///     Err(DequeError::StaleNode(StaleNodeError))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaleNodeError;

impl std::fmt::Display for StaleNodeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("node has been removed or belongs to another ring")
    }
}

impl std::error::Error for StaleNodeError {}

/// Represents any error produced by node-level operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DequeError {
    /// No element exists to remove.
    Empty(EmptyDequeError),
    /// The sentinel carries no data.
    SentinelData(SentinelDataError),
    /// The node handle is stale or foreign.
    StaleNode(StaleNodeError),
}

impl std::fmt::Display for DequeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(error) => write!(formatter, "{error}"),
            Self::SentinelData(error) => write!(formatter, "{error}"),
            Self::StaleNode(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for DequeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty(error) => Some(error),
            Self::SentinelData(error) => Some(error),
            Self::StaleNode(error) => Some(error),
        }
    }
}

impl From<EmptyDequeError> for DequeError {
    fn from(error: EmptyDequeError) -> Self {
        Self::Empty(error)
    }
}

impl From<SentinelDataError> for DequeError {
    fn from(error: SentinelDataError) -> Self {
        Self::SentinelData(error)
    }
}

impl From<StaleNodeError> for DequeError {
    fn from(error: StaleNodeError) -> Self {
        Self::StaleNode(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    #[case(DequeError::Empty(EmptyDequeError), "cannot remove a node from an empty deque")]
    #[case(DequeError::SentinelData(SentinelDataError), "cannot read data from the sentinel node")]
    #[case(
        DequeError::StaleNode(StaleNodeError),
        "node has been removed or belongs to another ring"
    )]
    fn test_deque_error_display(#[case] error: DequeError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_deque_error_from_conversions() {
        assert_eq!(DequeError::from(EmptyDequeError), DequeError::Empty(EmptyDequeError));
        assert_eq!(
            DequeError::from(SentinelDataError),
            DequeError::SentinelData(SentinelDataError)
        );
        assert_eq!(
            DequeError::from(StaleNodeError),
            DequeError::StaleNode(StaleNodeError)
        );
    }

    #[rstest]
    fn test_deque_error_source_is_inner_error() {
        let error = DequeError::SentinelData(SentinelDataError);
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("cannot read data from the sentinel node"));
    }
}
