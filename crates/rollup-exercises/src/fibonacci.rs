//! Bounded Fibonacci sequence

use std::iter;

/// Boundary is not reached exactly by the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FibonacciError {
    /// A term jumped past the boundary, or terms overflowed first
    #[error("you should inform a valid fibonacci sequence (got {boundary})")]
    NotInSequence {
        /// Requested boundary
        boundary: u64,
    },
}

/// Unbounded Fibonacci terms starting at 0, 1
///
/// Ends instead of overflowing.
pub fn fibonacci() -> impl Iterator<Item = u64> {
    iter::successors(Some((0u64, Some(1u64))), |&(a, b)| {
        b.map(|b| (b, a.checked_add(b)))
    })
    .map(|(a, _)| a)
}

/// Terms strictly before `boundary`
///
/// `boundary` must itself be a Fibonacci term; it is not included.
///
/// # Errors
/// [`FibonacciError::NotInSequence`] if the sequence passes `boundary`
/// without hitting it.
pub fn fibonacci_until(boundary: u64) -> Result<Vec<u64>, FibonacciError> {
    let mut terms = Vec::new();
    for term in fibonacci() {
        if term == boundary {
            tracing::trace!(boundary, terms = terms.len(), "boundary reached");
            return Ok(terms);
        }
        if term > boundary {
            break;
        }
        terms.push(term);
    }
    Err(FibonacciError::NotInSequence { boundary })
}
