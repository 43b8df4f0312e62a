//! Allocation error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while obtaining storage from an [`Allocator`].
///
/// [`Allocator`]: crate::Allocator
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested element count does not fit in a valid layout
    /// (total size would exceed `isize::MAX` bytes).
    CapacityOverflow {
        /// Number of elements requested.
        requested: usize,
    },
    /// The underlying allocator could not satisfy the request.
    OutOfMemory {
        /// Size of the refused block in bytes.
        bytes: usize,
        /// Alignment of the refused block in bytes.
        align: usize,
    },
    /// A budgeted allocator has no room left for the request.
    Exhausted {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes still available in the budget.
        remaining: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} elements exceed the maximum layout size")
            }
            Self::OutOfMemory { bytes, align } => {
                write!(f, "out of memory: failed to allocate {bytes} bytes (align {align})")
            }
            Self::Exhausted {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "allocation budget exhausted: requested {requested} bytes, {remaining} bytes remaining"
                )
            }
        }
    }
}

impl Error for AllocError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_sizes() {
        let err = AllocError::Exhausted {
            requested: 64,
            remaining: 16,
        };
        let msg = err.to_string();
        assert!(msg.contains("64"));
        assert!(msg.contains("16"));
    }

    #[test]
    fn usable_as_dyn_error() {
        let err: Box<dyn Error> = Box::new(AllocError::CapacityOverflow { requested: 7 });
        assert!(err.to_string().contains("capacity overflow"));
    }
}
