//! Errors surfaced by country workers and the coordinator.
//!
//! Every variant is fatal: there are no retries and the coordinator never
//! proceeds with a missing country.

use std::io;
use std::path::PathBuf;

use league_core::LeagueConfigError;

use crate::country::CountryId;

#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    /// Actual participant count differs from the configured country count.
    #[error("this tournament requires exactly {required} country workers, got {actual}")]
    WorkerCountMismatch { required: usize, actual: usize },

    #[error("at least one country is required")]
    NoCountries,

    #[error("invalid league configuration: {0}")]
    League(#[from] LeagueConfigError),

    #[error("failed to read config {path}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A match log, standings table or output directory could not be written.
    #[error("cannot write {path}: {source}")]
    Artifact { path: PathBuf, source: io::Error },

    #[error("country {country} worker panicked")]
    WorkerPanicked { country: CountryId },

    /// Every worker stopped before all countries reported.
    #[error("coordinator received {received} of {required} country reports")]
    WorkerLost { received: usize, required: usize },

    #[error("country {country} reported its qualifiers twice")]
    DuplicateReport { country: CountryId },

    #[error("country {country} is outside 0..{countries}")]
    UnknownCountry {
        country: CountryId,
        countries: usize,
    },

    #[error("country {country} could not reach the coordinator")]
    CoordinatorGone { country: CountryId },

    #[error("summary file {path}: {source}")]
    SummaryIo { path: PathBuf, source: io::Error },

    #[error("summary JSON {path}: {source}")]
    SummaryJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl TournamentError {
    pub(crate) fn artifact(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TournamentError::Artifact {
            path: path.into(),
            source,
        }
    }
}
