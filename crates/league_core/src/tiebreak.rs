//! Random nudge for a crowded top of the table.

use rand::Rng;

use crate::types::{Team, TeamId};

/// Bonus for the first team drawn from the tied group
pub const FIRST_BONUS: u32 = 2;

/// Bonus for the second, distinct team drawn
pub const SECOND_BONUS: u32 = 1;

/// Which teams were nudged, and out of which group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieBreak {
    pub top_points: u32,
    pub tied: Vec<TeamId>,
    pub first: TeamId,
    pub second: TeamId,
}

/// Break a tie for the highest points total when more than two teams share it.
///
/// One tied team gets +2 and a different tied team gets +1, both drawn
/// uniformly. With one or two teams on top nothing changes, and ties lower
/// down the table are never looked at.
pub fn break_top_tie<R>(teams: &mut [Team], rng: &mut R) -> Option<TieBreak>
where
    R: Rng + ?Sized,
{
    let top_points = teams.iter().map(|t| t.points).max()?;
    let tied: Vec<usize> = teams
        .iter()
        .enumerate()
        .filter(|(_, t)| t.points == top_points)
        .map(|(i, _)| i)
        .collect();

    if tied.len() <= 2 {
        return None;
    }

    let first = rng.gen_range(0..tied.len());
    let mut second = rng.gen_range(0..tied.len());
    while second == first {
        second = rng.gen_range(0..tied.len());
    }

    teams[tied[first]].points += FIRST_BONUS;
    teams[tied[second]].points += SECOND_BONUS;

    Some(TieBreak {
        top_points,
        tied: tied.iter().map(|&i| teams[i].id).collect(),
        first: teams[tied[first]].id,
        second: teams[tied[second]].id,
    })
}

#[cfg(test)]
#[path = "tiebreak_tests.rs"]
mod tiebreak_tests;
