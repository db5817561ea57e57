use fixed_bitset::{FixedBitSet, word_count};

const FLAGS: FixedBitSet<12, u16, { word_count(12) }> = FixedBitSet::new();
static SLOTS: FixedBitSet<130, u64, { word_count(130) }> = FixedBitSet::new();

fn main() {
    assert!(FLAGS.none());
    assert_eq!(SLOTS.first_zero(), 0);
}
