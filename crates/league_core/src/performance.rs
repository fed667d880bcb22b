//! Per-match performance rolls for roster slots.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;

use crate::seed::{slot_seed, worker_rng, Stream};
use crate::types::{Team, TeamId};

/// Lowest performance a player can roll
pub const MIN_PERFORMANCE: u32 = 1;

/// Highest performance a player can roll
pub const MAX_PERFORMANCE: u32 = 99;

/// Source of player performance values.
///
/// Called for both participants immediately before every match, so a team's
/// performance is re-rolled per match rather than fixed for the league.
pub trait PerformanceSource {
    /// Overwrite every roster slot of `team` in place.
    fn roll(&mut self, team: &mut Team);
}

/// Uniform [1, 99] draws, one independent generator per roster slot.
///
/// The worker-owned generator only produces a base seed per roll; each slot
/// then seeds its own `StdRng` from that base and its index, so the slots can
/// be filled in parallel without sharing any mutable state.
#[derive(Debug, Clone)]
pub struct RandomPerformance {
    rng: StdRng,
}

impl RandomPerformance {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source for one worker, derived from a base seed and the worker index.
    pub fn for_worker(base: u64, worker: usize) -> Self {
        Self {
            rng: worker_rng(base, worker, Stream::Performance),
        }
    }
}

impl PerformanceSource for RandomPerformance {
    fn roll(&mut self, team: &mut Team) {
        let base: u64 = self.rng.gen();
        team.performance
            .par_iter_mut()
            .enumerate()
            .for_each(|(slot, value)| {
                let mut rng = StdRng::seed_from_u64(slot_seed(base, slot));
                *value = rng.gen_range(MIN_PERFORMANCE..=MAX_PERFORMANCE);
            });
    }
}

/// Scripted performances keyed by team id.
///
/// Teams without an entry keep whatever values they already had. Extra
/// values beyond a team's roster size are ignored.
#[derive(Debug, Clone, Default)]
pub struct FixedPerformance {
    by_team: HashMap<TeamId, Vec<u32>>,
}

impl FixedPerformance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, team: TeamId, values: Vec<u32>) -> Self {
        self.by_team.insert(team, values);
        self
    }
}

impl PerformanceSource for FixedPerformance {
    fn roll(&mut self, team: &mut Team) {
        if let Some(values) = self.by_team.get(&team.id) {
            for (slot, value) in team.performance.iter_mut().zip(values) {
                *slot = *value;
            }
        }
    }
}

#[cfg(test)]
#[path = "performance_tests.rs"]
mod performance_tests;
