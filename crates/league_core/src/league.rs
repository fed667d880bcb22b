//! All-pairs league phase for one country.

use std::convert::Infallible;

use crate::config::LeagueConfig;
use crate::outcome::{MatchRecord, Outcome};
use crate::performance::PerformanceSource;
use crate::scoring::squad_score;
use crate::types::Team;

/// Sink for played matches, in play order.
pub trait MatchLog {
    type Error;

    fn record(&mut self, record: &MatchRecord) -> Result<(), Self::Error>;
}

impl MatchLog for Vec<MatchRecord> {
    type Error = Infallible;

    fn record(&mut self, record: &MatchRecord) -> Result<(), Self::Error> {
        self.push(*record);
        Ok(())
    }
}

/// Every unordered pair (i, j) with i < j, in row-major order.
pub fn round_robin_pairs(teams: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..teams).flat_map(move |i| (i + 1..teams).map(move |j| (i, j)))
}

/// Runs a round robin over a fixed roster of teams.
#[derive(Debug, Clone)]
pub struct LeagueEngine {
    config: LeagueConfig,
}

impl LeagueEngine {
    pub fn new(config: LeagueConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }

    /// Play every pair exactly once, lower index at home.
    ///
    /// Matches run strictly in sequence since points carry over. Each match
    /// re-rolls both rosters, scores the squads, awards points and hands the
    /// record to `log`. The first log error aborts the league.
    pub fn play<S, L>(
        &self,
        teams: &mut [Team],
        source: &mut S,
        log: &mut L,
    ) -> Result<(), L::Error>
    where
        S: PerformanceSource + ?Sized,
        L: MatchLog + ?Sized,
    {
        for (i, j) in round_robin_pairs(teams.len()) {
            let (head, tail) = teams.split_at_mut(j);
            let record = self.play_match(&mut head[i], &mut tail[0], source);
            log.record(&record)?;
        }
        Ok(())
    }

    /// Play a single match and award its points.
    pub fn play_match<S>(
        &self,
        home: &mut Team,
        away: &mut Team,
        source: &mut S,
    ) -> MatchRecord
    where
        S: PerformanceSource + ?Sized,
    {
        source.roll(home);
        source.roll(away);

        let home_score = squad_score(&home.performance, self.config.squad_size);
        let away_score = squad_score(&away.performance, self.config.squad_size);

        let outcome = Outcome::resolve(home_score, away_score);
        outcome.award(home, away);

        MatchRecord {
            home: home.id,
            away: away.id,
            home_score,
            away_score,
            outcome,
        }
    }
}

#[cfg(test)]
#[path = "league_tests.rs"]
mod league_tests;
