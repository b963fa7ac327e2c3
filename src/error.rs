//! Error types for rankcorr.
//!
//! Degenerate numerical results (zero variance, empty input) are not errors:
//! they come back as NaN or infinite values inside `Ok`.

use thiserror::Error;

/// Errors returned when the inputs of a correlation violate its preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The two sequences do not have the same number of elements.
    #[error("invalid input: length mismatch, x has {x_len} elements but y has {y_len}")]
    LengthMismatch {
        /// Length of the first sequence.
        x_len: usize,
        /// Length of the second sequence.
        y_len: usize,
    },

    /// Too few paired observations for the requested measure.
    #[error("invalid input: required at least {required} elements, got {actual}")]
    InsufficientData {
        /// Minimum number of pairs.
        required: usize,
        /// Number of pairs provided.
        actual: usize,
    },
}

impl Error {
    /// Both variants describe invalid caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::LengthMismatch { .. } | Error::InsufficientData { .. }
        )
    }
}

/// Convenience alias for results carrying the rankcorr [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Fails with [`Error::LengthMismatch`] unless both lengths agree.
pub(crate) fn ensure_same_len(x_len: usize, y_len: usize) -> Result<()> {
    if x_len != y_len {
        return Err(Error::LengthMismatch { x_len, y_len });
    }
    Ok(())
}
