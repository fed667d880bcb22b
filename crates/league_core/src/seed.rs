//! Seed derivation for per-worker and per-slot random sources.
//!
//! Every worker owns its random sources outright. Seeds are derived by mixing
//! a base value (wall clock or a configured seed) with the worker index and a
//! stream tag, so two workers started in the same nanosecond still diverge.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Independent random streams a worker draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Performance,
    TieBreak,
}

impl Stream {
    fn tag(self) -> u64 {
        match self {
            Stream::Performance => 0x5045_5246,
            Stream::TieBreak => 0x5449_4542,
        }
    }
}

/// SplitMix64 finalizer.
pub fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Wall-clock nanoseconds, used as the base seed when none is configured.
pub fn clock_seed() -> u64 {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    duration.as_nanos() as u64
}

/// Seed for one of a worker's streams.
pub fn worker_seed(base: u64, worker: usize, stream: Stream) -> u64 {
    let worker_mix = (worker as u64).wrapping_add(1).wrapping_mul(GOLDEN_GAMMA);
    mix64(base ^ worker_mix ^ mix64(stream.tag()))
}

/// Seed for a single roster slot's draw, derived from a per-roll base.
pub fn slot_seed(base: u64, slot: usize) -> u64 {
    mix64(base.wrapping_add((slot as u64).wrapping_add(1).wrapping_mul(GOLDEN_GAMMA)))
}

pub fn worker_rng(base: u64, worker: usize, stream: Stream) -> StdRng {
    StdRng::seed_from_u64(worker_seed(base, worker, stream))
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod seed_tests;
