//! Match resolution and the 3-1-0 points rule.

use crate::types::{Team, TeamId};

/// Points for a win
pub const WIN_POINTS: u32 = 3;

/// Points each side gets for a draw
pub const DRAW_POINTS: u32 = 1;

/// Result of a single match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Outcome {
    /// Strict comparison of the two squad scores.
    pub fn resolve(home_score: u32, away_score: u32) -> Self {
        match home_score.cmp(&away_score) {
            std::cmp::Ordering::Greater => Outcome::HomeWin,
            std::cmp::Ordering::Less => Outcome::AwayWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Points earned by (home, away)
    pub fn points(self) -> (u32, u32) {
        match self {
            Outcome::HomeWin => (WIN_POINTS, 0),
            Outcome::AwayWin => (0, WIN_POINTS),
            Outcome::Draw => (DRAW_POINTS, DRAW_POINTS),
        }
    }

    /// Add this outcome's points to both teams. Points are never removed.
    pub fn award(self, home: &mut Team, away: &mut Team) {
        let (home_points, away_points) = self.points();
        home.points += home_points;
        away.points += away_points;
    }
}

/// One played match, as written to a country's match log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRecord {
    pub home: TeamId,
    pub away: TeamId,
    pub home_score: u32,
    pub away_score: u32,
    pub outcome: Outcome,
}

impl MatchRecord {
    pub fn winner(&self) -> Option<TeamId> {
        match self.outcome {
            Outcome::HomeWin => Some(self.home),
            Outcome::AwayWin => Some(self.away),
            Outcome::Draw => None,
        }
    }

    /// Outcome label used in the match log
    pub fn label(&self) -> &'static str {
        match self.outcome {
            Outcome::HomeWin | Outcome::AwayWin => "Victoria",
            Outcome::Draw => "Empate",
        }
    }

    /// Points this match gave `team`, or None if it did not play in it.
    pub fn points_for(&self, team: TeamId) -> Option<u32> {
        let (home_points, away_points) = self.outcome.points();
        if team == self.home {
            Some(home_points)
        } else if team == self.away {
            Some(away_points)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod outcome_tests;
