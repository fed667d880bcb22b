//! League sizing shared by every country.

use thiserror::Error;

/// Number of teams in each country's league
pub const DEFAULT_TEAMS: usize = 20;

/// Players registered per team
pub const DEFAULT_ROSTER_SIZE: usize = 25;

/// Players fielded per match
pub const DEFAULT_SQUAD_SIZE: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueConfigError {
    #[error("squad size must be at least 1")]
    EmptySquad,
    #[error("squad size {squad} must be smaller than roster size {roster}")]
    SquadTooLarge { squad: usize, roster: usize },
    #[error("a league needs at least 2 teams to produce two qualifiers, got {0}")]
    TooFewTeams(usize),
}

/// Sizes for one country's league.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeagueConfig {
    pub teams: usize,
    pub roster_size: usize,
    pub squad_size: usize,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            teams: DEFAULT_TEAMS,
            roster_size: DEFAULT_ROSTER_SIZE,
            squad_size: DEFAULT_SQUAD_SIZE,
        }
    }
}

impl LeagueConfig {
    pub fn validate(&self) -> Result<(), LeagueConfigError> {
        if self.squad_size == 0 {
            return Err(LeagueConfigError::EmptySquad);
        }
        if self.squad_size >= self.roster_size {
            return Err(LeagueConfigError::SquadTooLarge {
                squad: self.squad_size,
                roster: self.roster_size,
            });
        }
        if self.teams < 2 {
            return Err(LeagueConfigError::TooFewTeams(self.teams));
        }
        Ok(())
    }

    /// Total matches in a full round robin: N·(N−1)/2
    pub fn match_count(&self) -> usize {
        self.teams * self.teams.saturating_sub(1) / 2
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
