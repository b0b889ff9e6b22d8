//! Errors reported by the checked permutation operations.
use thiserror::Error;

/// Error type for the `try_` variants of operations that otherwise rely on preconditions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermError {
    /// The operands of a composition have different degrees.
    #[error("cannot compose permutations of degree {left} and {right}")]
    DegreeMismatch {
        /// Degree of the left operand.
        left: usize,
        /// Degree of the right operand.
        right: usize,
    },

    /// A permuted sequence does not have the permutation's degree as its length.
    #[error("cannot permute a sequence of length {len} with a permutation of degree {degree}")]
    LengthMismatch {
        /// Degree of the permutation.
        degree: usize,
        /// Length of the sequence.
        len: usize,
    },
}
