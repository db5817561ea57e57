use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Shl, Shr};

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Unsigned integer used as a storage word of a
/// [`FixedBitSet`](crate::FixedBitSet).
///
/// Implemented for `u8`, `u16`, `u32` and `u64` only. The trait is sealed.
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + Hash
    + Debug
    + Default
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// The number of bits in this word type.
    const BITS: u32;
    /// All bits unset.
    const ZERO: Self;
    /// Only the least significant bit set.
    const ONE: Self;
    /// All bits set.
    const MAX: Self;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Length of the run of unset bits starting at the least significant
    /// bit. Equals [`Word::BITS`] for zero.
    fn trailing_zeros(self) -> u32;

    /// Length of the run of set bits starting at the least significant bit.
    /// Equals [`Word::BITS`] for [`Word::MAX`].
    fn trailing_ones(self) -> u32;

    /// Position of the highest set bit plus one, zero for zero.
    fn bit_width(self) -> u32;
}

macro_rules! impl_word {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn count_ones(self) -> u32 {
                    <$t>::count_ones(self)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$t>::trailing_zeros(self)
                }

                #[inline]
                fn trailing_ones(self) -> u32 {
                    <$t>::trailing_ones(self)
                }

                #[inline]
                fn bit_width(self) -> u32 {
                    <$t>::BITS - <$t>::leading_zeros(self)
                }
            }
        )+
    };
}

impl_word!(u8, u16, u32, u64);

/// Width in bits of the storage word a set of `bit_count` bits uses.
///
/// This is the narrowest of 8, 16, 32 and 64 that holds `bit_count` bits,
/// and 64 for anything wider (those sets use several `u64` words).
///
/// # Examples
/// ```
/// use fixed_bitset::word_bits;
///
/// assert_eq!(word_bits(1), 8);
/// assert_eq!(word_bits(9), 16);
/// assert_eq!(word_bits(32), 32);
/// assert_eq!(word_bits(33), 64);
/// assert_eq!(word_bits(200), 64);
/// ```
pub const fn word_bits(bit_count: usize) -> u32 {
    if bit_count <= 8 {
        8
    } else if bit_count <= 16 {
        16
    } else if bit_count <= 32 {
        32
    } else {
        64
    }
}

/// Number of storage words needed for `bit_count` bits.
///
/// One word up to 64 bits, `ceil(bit_count / 64)` `u64` words above. Inline
/// the call as a const expression into the type's generics.
///
/// # Examples
/// ```
/// use fixed_bitset::word_count;
///
/// assert_eq!(word_count(8), 1);
/// assert_eq!(word_count(64), 1);
/// assert_eq!(word_count(65), 2);
/// assert_eq!(word_count(129), 3);
/// ```
pub const fn word_count(bit_count: usize) -> usize {
    if bit_count <= 64 {
        1
    } else {
        bit_count.div_ceil(64)
    }
}

/// Number of live bits in the final storage word of a set of `bit_count`
/// bits. Only meaningful for `bit_count > 0`.
pub(crate) const fn live_bits_in_last_word(bit_count: usize) -> u32 {
    ((bit_count - 1) % 64 + 1) as u32
}
