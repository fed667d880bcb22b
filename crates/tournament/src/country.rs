//! Country worker: one full league phase for one country.

use chrono::{DateTime, Local};
use rand::Rng;
use tracing::info;

use league_core::{
    break_top_tie, new_roster, worker_rng, LeagueConfigError, LeagueEngine,
    PerformanceSource, RandomPerformance, Standings, Stream, TeamId, TieBreak,
    QUALIFIERS_PER_COUNTRY,
};

use crate::artifacts::{save_standings, OutputLayout, TsvMatchLog};
use crate::config::TournamentConfig;
use crate::coordinator::QualifierReport;
use crate::error::TournamentError;

/// Index of a country, 0..countries. Doubles as its worker index.
pub type CountryId = usize;

/// Everything a finished country worker produced.
#[derive(Debug, Clone)]
pub struct CountryResult {
    pub country: CountryId,
    pub standings: Standings,
    pub tie_break: Option<TieBreak>,
    /// Rows written to the match log
    pub matches_played: usize,
}

impl CountryResult {
    pub fn qualifiers(&self) -> Result<[TeamId; QUALIFIERS_PER_COUNTRY], TournamentError> {
        self.standings
            .qualifiers()
            .ok_or(TournamentError::League(LeagueConfigError::TooFewTeams(
                self.standings.len(),
            )))
    }

    /// The two integers this country sends to the coordinator.
    pub fn report(&self) -> Result<QualifierReport, TournamentError> {
        Ok(QualifierReport {
            country: self.country,
            qualifiers: self.qualifiers()?,
        })
    }
}

/// Runs country leagues and writes their artifacts.
///
/// Holds no mutable state, so one runner can be shared by every worker.
#[derive(Debug, Clone)]
pub struct CountryRunner {
    engine: LeagueEngine,
    layout: OutputLayout,
    base_seed: u64,
}

impl CountryRunner {
    pub fn new(config: &TournamentConfig, base_seed: u64) -> Self {
        Self {
            engine: LeagueEngine::new(config.league()),
            layout: OutputLayout::new(&config.output_dir),
            base_seed,
        }
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Run a country with random sources derived from the base seed and
    /// the country index.
    pub fn run(&self, country: CountryId) -> Result<CountryResult, TournamentError> {
        let mut performance = RandomPerformance::for_worker(self.base_seed, country);
        let mut tie_break_rng = worker_rng(self.base_seed, country, Stream::TieBreak);
        self.run_with(country, &mut performance, &mut tie_break_rng, Local::now())
    }

    /// Run a country with caller-supplied random sources.
    ///
    /// League, tie-break, ranking, then the standings file. The match log is
    /// written as the league progresses; any write failure ends the worker.
    pub fn run_with<S, R>(
        &self,
        country: CountryId,
        performance: &mut S,
        tie_break_rng: &mut R,
        created: DateTime<Local>,
    ) -> Result<CountryResult, TournamentError>
    where
        S: PerformanceSource + ?Sized,
        R: Rng + ?Sized,
    {
        let league = self.engine.config();
        info!(
            country,
            teams = league.teams,
            matches = league.match_count(),
            "country league starting"
        );

        let mut teams = new_roster(league.teams, league.roster_size);

        let log_path = self.layout.match_log_path(country);
        let mut log = TsvMatchLog::create(&log_path, &created)?;
        self.engine
            .play(&mut teams, performance, &mut log)
            .map_err(|e| TournamentError::artifact(&log_path, e))?;
        let matches_played = log.rows();
        log.finish()
            .map_err(|e| TournamentError::artifact(&log_path, e))?;

        let tie_break = break_top_tie(&mut teams, tie_break_rng);
        if let Some(tie) = &tie_break {
            info!(
                country,
                top_points = tie.top_points,
                tied = tie.tied.len(),
                first = tie.first.0,
                second = tie.second.0,
                "top-of-table tie broken"
            );
        }

        let standings = Standings::rank(teams);
        save_standings(&self.layout.standings_path(country), &standings, &created)?;

        let result = CountryResult {
            country,
            standings,
            tie_break,
            matches_played,
        };
        let [first, second] = result.qualifiers()?;
        info!(
            country,
            first = first.0,
            second = second.0,
            "country league finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
#[path = "country_tests.rs"]
mod country_tests;
