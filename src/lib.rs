//! A fixed-width, compile-time-sized bitset written in pure Rust.
//! `no_std`, no heap / `alloc`, no `unsafe`, just `core`.
//!
//! Designed for dense boolean state in embedded and performance-sensitive
//! code: flag registers, membership masks, free-slot trackers.
//!
//! [`FixedBitSet`] is the main struct in this library. Its
//! [features](#features) are listed below.
//!
//! # Examples
//! ```
//! use fixed_bitset::{FixedBitSet, word_count};
//!
//! const BIT_COUNT: usize = 10;
//! let mut bits = FixedBitSet::<BIT_COUNT, u16, { word_count(BIT_COUNT) }>::new();
//! assert_eq!(bits.count(), 0);
//! assert_eq!(bits.first_zero(), 0);
//! bits.set(0).set(1);
//! assert_eq!(bits.first_zero(), 2);
//! assert_eq!(bits.to_string(), "0000000011");
//! ```
//!
//! # Storage
//!
//! A set of `N <= 64` bits is a single word of the narrowest of `u8`, `u16`,
//! `u32` and `u64` that holds `N` bits ([`word_bits`]). Wider sets use
//! [`word_count`]`(N)` words of `u64`. The caller spells both out in the
//! type, and a mismatch fails to compile:
//!
//! | `N`        | `W`   | `WORD_COUNT`     |
//! |------------|-------|------------------|
//! | `1..=8`    | `u8`  | 1                |
//! | `9..=16`   | `u16` | 1                |
//! | `17..=32`  | `u32` | 1                |
//! | `33..=64`  | `u64` | 1                |
//! | `65..`     | `u64` | `N.div_ceil(64)` |
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - No heap allocations (stack-only), footprint of exactly the storage words
//! - Const-generic API: `FixedBitSet<const N, W, const WORD_COUNT>`
//! - Whole-set queries: `all`, `any`, `none`, `count`
//! - Scans: `first_one`, `first_zero` (returning `N` when there is none)
//! - Modifiers: `set`, `set_value`, `reset`, `toggle`, `set_all`,
//!   `reset_all`, `flip`, all chainable
//! - Unchecked operations (debug-asserted) alongside checked `try_*`
//!   operations returning [`Error`]
//! - Comparison against raw storage words
//! - `Display` rendering from most to least significant bit

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod bitset;
mod error;
mod word;

pub use bitset::FixedBitSet;
pub use error::{Error, Result};
pub use word::{Word, word_bits, word_count};
