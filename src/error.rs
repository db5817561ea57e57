//! Errors reported by the checked (`try_*`) operations.

use core::fmt;

/// Result type used by the checked operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Error type of the checked operations of [`FixedBitSet`].
///
/// The unchecked operations never return it; they `debug_assert!` instead.
///
/// [`FixedBitSet`]: crate::FixedBitSet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A bit index was not below the width of the set.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The width `N` of the set.
        size: usize,
    },
    /// Raw storage had a bit set at or above the width of the set.
    PaddingBitsSet {
        /// Index of the highest set bit in the raw storage.
        highest_bit: usize,
        /// The width `N` of the set.
        size: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, size } => {
                write!(f, "Bit index {index} out of bounds for width {size}")
            }
            Error::PaddingBitsSet { highest_bit, size } => {
                write!(f, "Raw storage sets bit {highest_bit} beyond width {size}")
            }
        }
    }
}

impl core::error::Error for Error {}
