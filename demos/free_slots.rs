use fixed_bitset::{FixedBitSet, word_count};

const SLOT_COUNT: usize = 70;

/// Hands out the lowest free slot of a fixed pool.
struct SlotPool {
    used: FixedBitSet<SLOT_COUNT, u64, { word_count(SLOT_COUNT) }>,
}

impl SlotPool {
    fn new() -> Self {
        Self {
            used: FixedBitSet::new(),
        }
    }

    fn acquire(&mut self) -> Option<usize> {
        let slot = self.used.first_zero();
        if slot == self.used.size() {
            return None;
        }
        self.used.set(slot);
        Some(slot)
    }

    fn release(&mut self, slot: usize) -> fixed_bitset::Result<()> {
        self.used.try_reset(slot)?;
        Ok(())
    }
}

fn main() {
    let mut pool = SlotPool::new();
    let acquired: Vec<usize> = (0..SLOT_COUNT + 2).filter_map(|_| pool.acquire()).collect();
    println!("acquired {} slots, pool full: {}", acquired.len(), pool.used.all());

    pool.release(3).unwrap();
    pool.release(66).unwrap();
    println!("next free slot: {}", pool.used.first_zero());
    println!("{}", pool.used);

    if let Err(err) = pool.release(SLOT_COUNT) {
        println!("release failed: {err}");
    }
}
