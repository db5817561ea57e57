use crate::error::{Error, Result};
use crate::word::{Word, live_bits_in_last_word, word_bits, word_count};
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::Index;

/// A fixed number of bits packed into the narrowest storage words.
///
/// `N` is the number of usable bits. `W` is the storage word and must be the
/// type [`word_bits`] names for `N` (`u8`, `u16`, `u32` or `u64`).
/// `WORD_COUNT` is the number of words and should only be set via const
/// expression with [`word_count`]. Any mismatch, as well as `N == 0`, is a
/// compile-time error:
///
/// ```compile_fail
/// use fixed_bitset::FixedBitSet;
///
/// let _ = FixedBitSet::<0, u8, 1>::new();
/// ```
///
/// ```compile_fail
/// use fixed_bitset::FixedBitSet;
///
/// // 8 bits fit a `u8`, so a `u16` word is rejected.
/// let _ = FixedBitSet::<8, u16, 1>::new();
/// ```
///
/// ```compile_fail
/// use fixed_bitset::FixedBitSet;
///
/// let _ = FixedBitSet::<65, u64, 1>::new();
/// ```
///
/// Bit `0` is the least significant bit of the first word. Bits of the final
/// word at or above `N` are padding and always stay unset.
///
/// # Access tiers
/// The plain operations ([`test`], [`set`], [`set_value`], [`reset`],
/// [`toggle`], [`from_words`], [`from_word`] and indexing) are unchecked:
/// their preconditions are `debug_assert!`ed only. In release builds an
/// out-of-range index either panics on the storage access or hits padding,
/// which reads as unset and is masked on write. The `try_*` operations are
/// checked and return an [`Error`] instead.
///
/// # Examples
/// ```
/// use fixed_bitset::{FixedBitSet, word_count};
///
/// let mut bits = FixedBitSet::<10, u16, { word_count(10) }>::new();
/// bits.set(1).set(4);
/// assert_eq!(bits.count(), 2);
/// assert_eq!(bits.first_one(), 1);
/// assert_eq!(bits.to_string(), "0000010010");
/// ```
///
/// [`test`]: FixedBitSet::test
/// [`set`]: FixedBitSet::set
/// [`set_value`]: FixedBitSet::set_value
/// [`reset`]: FixedBitSet::reset
/// [`toggle`]: FixedBitSet::toggle
/// [`from_words`]: FixedBitSet::from_words
/// [`from_word`]: FixedBitSet::from_word
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct FixedBitSet<const N: usize, W: Word, const WORD_COUNT: usize>(
    pub(crate) [W; WORD_COUNT],
);

impl<const N: usize, W: Word, const WORD_COUNT: usize> FixedBitSet<N, W, WORD_COUNT> {
    const PARAMS_OK: () = {
        assert!(N > 0, "N must be greater than zero.");
        assert!(
            W::BITS == word_bits(N),
            "W must be the narrowest word holding N bits, see word_bits(N)."
        );
        assert!(
            WORD_COUNT == word_count(N),
            "WORD_COUNT must match word_count(N)."
        );
    };

    const SINGLE_WORD: () = assert!(
        WORD_COUNT == 1,
        "Single-word access is only available for N <= 64."
    );

    /// Creates a new set with all bits unset.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{FixedBitSet, word_count};
    ///
    /// const EMPTY: FixedBitSet<70, u64, { word_count(70) }> = FixedBitSet::new();
    /// assert!(EMPTY.none());
    /// ```
    pub const fn new() -> Self {
        let () = Self::PARAMS_OK;
        Self([W::ZERO; WORD_COUNT])
    }

    /// Creates a new set with all bits set.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{FixedBitSet, word_count};
    ///
    /// let bits = FixedBitSet::<10, u16, { word_count(10) }>::with_all_set();
    /// assert_eq!(bits.count(), 10);
    /// ```
    pub fn with_all_set() -> Self {
        let mut bits = Self::new();
        bits.set_all();
        bits
    }

    /// Creates a set from its raw storage words, least significant word
    /// first.
    ///
    /// The words must not set any bit at or above `N`. This is only checked
    /// by a debug assertion; release builds drop such bits. Use
    /// [`try_from_words`] for a checked variant.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{FixedBitSet, word_count};
    ///
    /// let bits = FixedBitSet::<65, u64, { word_count(65) }>::from_words([u64::MAX, 1]);
    /// assert!(bits.all());
    /// assert_eq!(bits.first_zero(), 65);
    /// ```
    ///
    /// [`try_from_words`]: FixedBitSet::try_from_words
    #[inline]
    pub fn from_words(words: [W; WORD_COUNT]) -> Self {
        let () = Self::PARAMS_OK;
        debug_assert!(
            Self::padding_clean(&words),
            "Raw storage sets bits beyond width {N}"
        );
        let mut bits = Self(words);
        bits.clean_padding();
        bits
    }

    /// Creates a set from its raw storage words, rejecting words that set
    /// bits at or above `N`.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{Error, FixedBitSet, word_count};
    ///
    /// type Bits = FixedBitSet<70, u64, { word_count(70) }>;
    ///
    /// assert!(Bits::try_from_words([0, 1 << 5]).is_ok());
    /// assert_eq!(
    ///     Bits::try_from_words([0, 1 << 6]),
    ///     Err(Error::PaddingBitsSet { highest_bit: 70, size: 70 })
    /// );
    /// ```
    pub fn try_from_words(words: [W; WORD_COUNT]) -> Result<Self> {
        let () = Self::PARAMS_OK;
        if !Self::padding_clean(&words) {
            let last = WORD_COUNT - 1;
            let width = words[last].bit_width() as usize;
            return Err(Error::PaddingBitsSet {
                highest_bit: last * W::BITS as usize + width - 1,
                size: N,
            });
        }
        Ok(Self(words))
    }

    /// Creates a single-word set (`N <= 64`) from its raw storage word.
    ///
    /// Same contract as [`from_words`]. Using it on a multi-word set does not
    /// compile.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{FixedBitSet, word_count};
    ///
    /// let bits = FixedBitSet::<8, u8, { word_count(8) }>::from_word(0b0011_0101);
    /// assert_eq!(bits.count(), 4);
    /// ```
    ///
    /// ```compile_fail
    /// use fixed_bitset::{FixedBitSet, word_count};
    ///
    /// let _ = FixedBitSet::<65, u64, { word_count(65) }>::from_word(1);
    /// ```
    ///
    /// [`from_words`]: FixedBitSet::from_words
    #[inline]
    pub fn from_word(word: W) -> Self {
        let () = Self::SINGLE_WORD;
        Self::from_words([word; WORD_COUNT])
    }

    /// Checked variant of [`from_word`].
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{Error, FixedBitSet, word_count};
    ///
    /// type Bits = FixedBitSet<5, u8, { word_count(5) }>;
    ///
    /// assert!(Bits::try_from_word(0b1_0000).is_ok());
    /// assert_eq!(
    ///     Bits::try_from_word(0b10_0000),
    ///     Err(Error::PaddingBitsSet { highest_bit: 5, size: 5 })
    /// );
    /// ```
    ///
    /// [`from_word`]: FixedBitSet::from_word
    pub fn try_from_word(word: W) -> Result<Self> {
        let () = Self::SINGLE_WORD;
        Self::try_from_words([word; WORD_COUNT])
    }

    /// Creates a set with exactly the given indices set.
    ///
    /// Fails on the first index that is not below `N`.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{Error, FixedBitSet, word_count};
    ///
    /// type Bits = FixedBitSet<5, u8, { word_count(5) }>;
    ///
    /// let bits = Bits::try_from_ones([0, 2, 4]).unwrap();
    /// assert_eq!(bits, 0b10101);
    /// assert_eq!(
    ///     Bits::try_from_ones([1, 5]),
    ///     Err(Error::IndexOutOfRange { index: 5, size: 5 })
    /// );
    /// ```
    pub fn try_from_ones<I: IntoIterator<Item = usize>>(indices: I) -> Result<Self> {
        let mut bits = Self::new();
        for pos in indices {
            bits.try_set(pos)?;
        }
        Ok(bits)
    }

    /// The raw storage words, least significant word first.
    #[inline]
    pub const fn words(&self) -> &[W; WORD_COUNT] {
        &self.0
    }

    /// Returns the number of bits, `N`.
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns `true` if every bit is set.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{FixedBitSet, word_count};
    ///
    /// let mut bits = FixedBitSet::<3, u8, { word_count(3) }>::from_word(0b011);
    /// assert!(!bits.all());
    /// bits.set(2);
    /// assert!(bits.all());
    /// ```
    pub fn all(&self) -> bool {
        let last = WORD_COUNT - 1;
        self.0[..last].iter().all(|&word| word == W::MAX) && self.0[last] == Self::last_word_mask()
    }

    /// Returns `true` if at least one bit is set.
    #[inline]
    pub fn any(&self) -> bool {
        self.0.iter().any(|&word| word != W::ZERO)
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub fn none(&self) -> bool {
        self.0.iter().all(|&word| word == W::ZERO)
    }

    /// Returns the number of set bits.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{FixedBitSet, word_count};
    ///
    /// let bits = FixedBitSet::<129, u64, { word_count(129) }>::from_words([3, 0, 1]);
    /// assert_eq!(bits.count(), 3);
    /// ```
    #[inline]
    pub fn count(&self) -> usize {
        self.0.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns the index of the lowest set bit, or `N` if no bit is set.
    ///
    /// Runs in O(w) where w is the word count.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{FixedBitSet, word_count};
    ///
    /// type Bits = FixedBitSet<129, u64, { word_count(129) }>;
    ///
    /// assert_eq!(Bits::new().first_one(), 129);
    /// assert_eq!(Bits::from_words([0, 0, 1]).first_one(), 128);
    /// ```
    #[inline]
    pub fn first_one(&self) -> usize {
        self.first_run_end(W::trailing_zeros)
    }

    /// Returns the index of the lowest unset bit, or `N` if every bit is set.
    ///
    /// Runs in O(w) where w is the word count.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{FixedBitSet, word_count};
    ///
    /// type Bits = FixedBitSet<8, u8, { word_count(8) }>;
    ///
    /// assert_eq!(Bits::from_word(0b0011_0101).first_zero(), 1);
    /// assert_eq!(Bits::from_word(0xff).first_zero(), 8);
    /// ```
    #[inline]
    pub fn first_zero(&self) -> usize {
        self.first_run_end(W::trailing_ones)
    }

    // Walks the words from least significant, summing the trailing run of
    // each. The first run shorter than a word ends inside that word. Padding
    // is unset, so a full set's trailing-ones scan stops exactly at `N`.
    #[inline]
    fn first_run_end(&self, run_len: impl Fn(W) -> u32) -> usize {
        let mut pos = 0;
        for &word in &self.0 {
            let run = run_len(word);
            pos += run as usize;
            if run != W::BITS {
                return pos;
            }
        }
        N
    }

    /// Returns `true` if the bit at `pos` is set.
    ///
    /// Unchecked tier: `pos < N` is only debug-asserted. See
    /// [`try_test`](FixedBitSet::try_test).
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{FixedBitSet, word_count};
    ///
    /// let bits = FixedBitSet::<8, u8, { word_count(8) }>::from_word(0b0011_0101);
    /// assert!(bits.test(0));
    /// assert!(!bits.test(1));
    /// assert!(bits[2]);
    /// ```
    #[inline]
    pub fn test(&self, pos: usize) -> bool {
        debug_assert!(pos < N, "Bit index {pos} out of bounds");
        let (word, shift) = Self::idxs(pos);
        (self.0[word] >> shift) & W::ONE != W::ZERO
    }

    /// Returns whether the bit at `pos` is set, or an error if `pos >= N`.
    pub fn try_test(&self, pos: usize) -> Result<bool> {
        Self::check(pos)?;
        Ok(self.test(pos))
    }

    /// Sets every bit.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{FixedBitSet, word_count};
    ///
    /// let mut bits = FixedBitSet::<70, u64, { word_count(70) }>::new();
    /// assert_eq!(bits.set_all().count(), 70);
    /// assert_eq!(bits.words()[1], 0b11_1111);
    /// ```
    pub fn set_all(&mut self) -> &mut Self {
        self.0 = [W::MAX; WORD_COUNT];
        self.clean_padding();
        self
    }

    /// Sets the bit at `pos`.
    ///
    /// Unchecked tier: `pos < N` is only debug-asserted. See
    /// [`try_set`](FixedBitSet::try_set).
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{FixedBitSet, word_count};
    ///
    /// let mut bits = FixedBitSet::<8, u8, { word_count(8) }>::new();
    /// bits.set(3).set(5);
    /// assert_eq!(bits, 0b0010_1000);
    /// ```
    #[inline]
    pub fn set(&mut self, pos: usize) -> &mut Self {
        debug_assert!(pos < N, "Bit index {pos} out of bounds");
        let (word, shift) = Self::idxs(pos);
        let mut mask = W::ONE << shift;
        if word == WORD_COUNT - 1 {
            mask &= Self::last_word_mask();
        }
        self.0[word] |= mask;
        self
    }

    /// Sets the bit at `pos` to `value`. Clearing goes through
    /// [`reset`](FixedBitSet::reset).
    ///
    /// Unchecked tier: `pos < N` is only debug-asserted.
    #[inline]
    pub fn set_value(&mut self, pos: usize, value: bool) -> &mut Self {
        if value { self.set(pos) } else { self.reset(pos) }
    }

    /// Checked variant of [`set`](FixedBitSet::set).
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{Error, FixedBitSet, word_count};
    ///
    /// let mut bits = FixedBitSet::<4, u8, { word_count(4) }>::new();
    /// assert!(bits.try_set(3).is_ok());
    /// assert_eq!(bits.try_set(4), Err(Error::IndexOutOfRange { index: 4, size: 4 }));
    /// ```
    pub fn try_set(&mut self, pos: usize) -> Result<&mut Self> {
        Self::check(pos)?;
        Ok(self.set(pos))
    }

    /// Checked variant of [`set_value`](FixedBitSet::set_value).
    pub fn try_set_value(&mut self, pos: usize, value: bool) -> Result<&mut Self> {
        Self::check(pos)?;
        Ok(self.set_value(pos, value))
    }

    /// Inverts every bit.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{FixedBitSet, word_count};
    ///
    /// let mut bits = FixedBitSet::<5, u8, { word_count(5) }>::from_word(0b00110);
    /// bits.flip();
    /// assert_eq!(bits, 0b11001);
    /// ```
    pub fn flip(&mut self) -> &mut Self {
        for word in &mut self.0 {
            *word = !*word;
        }
        self.clean_padding();
        self
    }

    /// Toggles the bit at `pos` and returns its previous value.
    ///
    /// Unchecked tier: `pos < N` is only debug-asserted.
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{FixedBitSet, word_count};
    ///
    /// let mut bits = FixedBitSet::<8, u8, { word_count(8) }>::new();
    /// assert_eq!(bits.toggle(4), false);
    /// assert_eq!(bits.toggle(4), true);
    /// assert!(bits.none());
    /// ```
    #[inline]
    pub fn toggle(&mut self, pos: usize) -> bool {
        let previous = self.test(pos);
        self.set_value(pos, !previous);
        previous
    }

    /// Checked variant of [`toggle`](FixedBitSet::toggle).
    pub fn try_toggle(&mut self, pos: usize) -> Result<bool> {
        Self::check(pos)?;
        Ok(self.toggle(pos))
    }

    /// Unsets every bit.
    #[inline]
    pub fn reset_all(&mut self) -> &mut Self {
        self.0 = [W::ZERO; WORD_COUNT];
        self
    }

    /// Unsets the bit at `pos`.
    ///
    /// Unchecked tier: `pos < N` is only debug-asserted. See
    /// [`try_reset`](FixedBitSet::try_reset).
    ///
    /// # Examples
    /// ```
    /// use fixed_bitset::{FixedBitSet, word_count};
    ///
    /// let mut bits = FixedBitSet::<8, u8, { word_count(8) }>::with_all_set();
    /// bits.reset(0).reset(7);
    /// assert_eq!(bits, 0b0111_1110);
    /// ```
    #[inline]
    pub fn reset(&mut self, pos: usize) -> &mut Self {
        debug_assert!(pos < N, "Bit index {pos} out of bounds");
        let (word, shift) = Self::idxs(pos);
        let mut mask = !(W::ONE << shift);
        if word == WORD_COUNT - 1 {
            mask &= Self::last_word_mask();
        }
        self.0[word] &= mask;
        self
    }

    /// Checked variant of [`reset`](FixedBitSet::reset).
    pub fn try_reset(&mut self, pos: usize) -> Result<&mut Self> {
        Self::check(pos)?;
        Ok(self.reset(pos))
    }

    #[inline]
    fn idxs(pos: usize) -> (usize, u32) {
        let bits = W::BITS as usize;
        (pos / bits, (pos % bits) as u32)
    }

    #[inline]
    fn check(pos: usize) -> Result<()> {
        if pos < N {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: pos,
                size: N,
            })
        }
    }

    /// Live bits of the final word.
    #[inline]
    fn last_word_mask() -> W {
        W::MAX >> (W::BITS - live_bits_in_last_word(N))
    }

    #[inline]
    fn padding_clean(words: &[W; WORD_COUNT]) -> bool {
        words[WORD_COUNT - 1] & !Self::last_word_mask() == W::ZERO
    }

    #[inline]
    fn clean_padding(&mut self) {
        self.0[WORD_COUNT - 1] &= Self::last_word_mask();
    }
}

impl<const N: usize, W: Word, const WORD_COUNT: usize> Default for FixedBitSet<N, W, WORD_COUNT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, W: Word, const WORD_COUNT: usize> Index<usize>
    for FixedBitSet<N, W, WORD_COUNT>
{
    type Output = bool;

    /// Unchecked tier, like [`FixedBitSet::test`].
    fn index(&self, pos: usize) -> &bool {
        if self.test(pos) { &true } else { &false }
    }
}

impl<const N: usize, W: Word, const WORD_COUNT: usize> PartialEq<[W; WORD_COUNT]>
    for FixedBitSet<N, W, WORD_COUNT>
{
    fn eq(&self, other: &[W; WORD_COUNT]) -> bool {
        self.0 == *other
    }
}

macro_rules! impl_eq_raw_word {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<const N: usize, const WORD_COUNT: usize> PartialEq<$t>
                for FixedBitSet<N, $t, WORD_COUNT>
            {
                fn eq(&self, other: &$t) -> bool {
                    let () = Self::SINGLE_WORD;
                    self.0[0] == *other
                }
            }
        )+
    };
}

impl_eq_raw_word!(u8, u16, u32, u64);

/// Renders exactly `N` characters `'1'`/`'0'`, from bit `N - 1` down to
/// bit `0`.
impl<const N: usize, W: Word, const WORD_COUNT: usize> Display for FixedBitSet<N, W, WORD_COUNT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for pos in (0..N).rev() {
            f.write_str(if self.test(pos) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl<const N: usize, W: Word, const WORD_COUNT: usize> Debug for FixedBitSet<N, W, WORD_COUNT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FixedBitSet<{N}>(")?;
        Display::fmt(self, f)?;
        write!(f, ")")
    }
}
