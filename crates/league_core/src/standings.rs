//! Final league table.

use crate::types::{Team, TeamId};

/// Teams advancing from each country
pub const QUALIFIERS_PER_COUNTRY: usize = 2;

/// Teams ordered by points, highest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    rows: Vec<Team>,
}

impl Standings {
    /// Sort by points descending. Equal totals keep no guaranteed order.
    pub fn rank(mut teams: Vec<Team>) -> Self {
        teams.sort_unstable_by(|a, b| b.points.cmp(&a.points));
        Self { rows: teams }
    }

    pub fn rows(&self) -> &[Team] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ids of the top two teams, or None if fewer than two teams played.
    pub fn qualifiers(&self) -> Option<[TeamId; QUALIFIERS_PER_COUNTRY]> {
        match self.rows.as_slice() {
            [first, second, ..] => Some([first.id, second.id]),
            _ => None,
        }
    }

    pub fn position_of(&self, team: TeamId) -> Option<usize> {
        self.rows.iter().position(|t| t.id == team)
    }
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
