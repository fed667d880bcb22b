//! Per-country output files: the match log and the standings table.
//!
//! Both are tab-separated, start with a creation timestamp comment and then
//! a header row.

use chrono::{DateTime, Local};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use league_core::{MatchLog, MatchRecord, Standings};

use crate::country::CountryId;
use crate::error::TournamentError;

pub const MATCH_LOG_DIR: &str = "logs_partidos_pais";
pub const STANDINGS_DIR: &str = "tabla_puntuacion";

pub const MATCH_LOG_HEADER: &str = "Equipo_local\tEquipo_visita\tDesenlace\tGanador";
pub const STANDINGS_HEADER: &str = "Equipo\tPuntaje";

/// Winner column for a draw
pub const NO_WINNER: &str = "---";

/// `# Fecha de creación: DD-MM-YYYY HH:MM:SS`
pub fn creation_line(created: &DateTime<Local>) -> String {
    format!("# Fecha de creación: {}", created.format("%d-%m-%Y %H:%M:%S"))
}

/// Where each country's artifacts live under the output root.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create both artifact directories. Existing directories are fine.
    pub fn prepare(&self) -> Result<(), TournamentError> {
        for dir in [self.root.join(MATCH_LOG_DIR), self.root.join(STANDINGS_DIR)] {
            std::fs::create_dir_all(&dir).map_err(|e| TournamentError::artifact(dir, e))?;
        }
        Ok(())
    }

    pub fn match_log_path(&self, country: CountryId) -> PathBuf {
        self.root
            .join(MATCH_LOG_DIR)
            .join(format!("log_pais_{}.txt", country))
    }

    pub fn standings_path(&self, country: CountryId) -> PathBuf {
        self.root
            .join(STANDINGS_DIR)
            .join(format!("tabla_puntuacion_pais_{}.tsv", country))
    }
}

/// Match log writer, one row per match in play order.
pub struct TsvMatchLog<W: Write> {
    out: W,
    rows: usize,
}

impl TsvMatchLog<BufWriter<File>> {
    pub fn create(path: &Path, created: &DateTime<Local>) -> Result<Self, TournamentError> {
        let file = File::create(path).map_err(|e| TournamentError::artifact(path, e))?;
        TsvMatchLog::new(BufWriter::new(file), created)
            .map_err(|e| TournamentError::artifact(path, e))
    }
}

impl<W: Write> TsvMatchLog<W> {
    /// Wrap a writer and emit the timestamp and header lines.
    pub fn new(mut out: W, created: &DateTime<Local>) -> io::Result<Self> {
        writeln!(out, "{}", creation_line(created))?;
        writeln!(out, "{}", MATCH_LOG_HEADER)?;
        Ok(Self { out, rows: 0 })
    }

    /// Match rows written so far
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> MatchLog for TsvMatchLog<W> {
    type Error = io::Error;

    fn record(&mut self, record: &MatchRecord) -> Result<(), Self::Error> {
        debug!(
            home = record.home.0,
            away = record.away.0,
            home_score = record.home_score,
            away_score = record.away_score,
            outcome = ?record.outcome,
            "match played"
        );
        let winner = match record.winner() {
            Some(team) => format!("Equipo {}", team),
            None => NO_WINNER.to_string(),
        };
        writeln!(
            self.out,
            "Equipo {}\tEquipo {}\t{}\t{}",
            record.home,
            record.away,
            record.label(),
            winner
        )?;
        self.rows += 1;
        Ok(())
    }
}

/// Write a standings table in rank order.
pub fn write_standings<W: Write>(
    out: &mut W,
    standings: &Standings,
    created: &DateTime<Local>,
) -> io::Result<()> {
    writeln!(out, "{}", creation_line(created))?;
    writeln!(out, "{}", STANDINGS_HEADER)?;
    for team in standings.rows() {
        writeln!(out, "{}\t{}", team.id, team.points)?;
    }
    out.flush()
}

pub fn save_standings(
    path: &Path,
    standings: &Standings,
    created: &DateTime<Local>,
) -> Result<(), TournamentError> {
    let file = File::create(path).map_err(|e| TournamentError::artifact(path, e))?;
    let mut out = BufWriter::new(file);
    write_standings(&mut out, standings, created).map_err(|e| TournamentError::artifact(path, e))
}

#[cfg(test)]
#[path = "artifacts_tests.rs"]
mod artifacts_tests;
