//! Tournament configuration.
//!
//! The defaults are the fixed tournament shape. A TOML file may override any
//! subset of fields; missing keys keep their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use league_core::{LeagueConfig, DEFAULT_ROSTER_SIZE, DEFAULT_SQUAD_SIZE, DEFAULT_TEAMS};

use crate::error::TournamentError;

/// Number of countries (and therefore workers)
pub const DEFAULT_COUNTRIES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub countries: usize,
    pub teams_per_country: usize,
    pub roster_size: usize,
    pub squad_size: usize,
    /// Root under which the log and standings directories are created
    pub output_dir: PathBuf,
    /// Fixed base seed; None seeds every worker from the wall clock
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            countries: DEFAULT_COUNTRIES,
            teams_per_country: DEFAULT_TEAMS,
            roster_size: DEFAULT_ROSTER_SIZE,
            squad_size: DEFAULT_SQUAD_SIZE,
            output_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

impl TournamentConfig {
    /// Load overrides from a TOML file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| TournamentError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        toml::from_str(&contents).map_err(|source| TournamentError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Sizes handed to each country's league
    pub fn league(&self) -> LeagueConfig {
        LeagueConfig {
            teams: self.teams_per_country,
            roster_size: self.roster_size,
            squad_size: self.squad_size,
        }
    }

    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.countries == 0 {
            return Err(TournamentError::NoCountries);
        }
        self.league().validate()?;
        Ok(())
    }

    /// Fail fast unless exactly one worker per country is taking part.
    pub fn check_workers(&self, actual: usize) -> Result<(), TournamentError> {
        if actual != self.countries {
            return Err(TournamentError::WorkerCountMismatch {
                required: self.countries,
                actual,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
