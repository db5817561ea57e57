use fixed_bitset::{FixedBitSet, word_count};

fn main() {
    let _ = FixedBitSet::<1, u8, { word_count(1) }>::new();
    let _ = FixedBitSet::<8, u8, { word_count(8) }>::new();
    let _ = FixedBitSet::<9, u16, { word_count(9) }>::new();
    let _ = FixedBitSet::<16, u16, { word_count(16) }>::new();
    let _ = FixedBitSet::<17, u32, { word_count(17) }>::new();
    let _ = FixedBitSet::<32, u32, { word_count(32) }>::new();
    let _ = FixedBitSet::<33, u64, { word_count(33) }>::new();
    let _ = FixedBitSet::<64, u64, { word_count(64) }>::from_word(u64::MAX);
    let _ = FixedBitSet::<65, u64, { word_count(65) }>::from_words([u64::MAX, 1]);
    let _ = FixedBitSet::<1000, u64, { word_count(1000) }>::with_all_set();
}
