use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a team within one country (0..N-1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A league team: its roster's current performance values and its points.
///
/// `performance` has one entry per roster slot and is re-rolled before every
/// match. Its length is fixed at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub performance: Vec<u32>,
    pub points: u32,
}

impl Team {
    pub fn new(id: TeamId, roster_size: usize) -> Self {
        Self {
            id,
            performance: vec![0; roster_size],
            points: 0,
        }
    }
}

/// Build a country's roster: `count` teams with ids 0..count, all on zero points.
pub fn new_roster(count: usize, roster_size: usize) -> Vec<Team> {
    (0..count)
        .map(|i| Team::new(TeamId(i as u32), roster_size))
        .collect()
}
