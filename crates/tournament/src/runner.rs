//! Whole-tournament run: one blocking task per country, then the gather.

use std::sync::Arc;
use tracing::{error, info};

use league_core::clock_seed;

use crate::config::TournamentConfig;
use crate::coordinator::{Coordinator, ReportSender};
use crate::country::{CountryId, CountryResult, CountryRunner};
use crate::error::TournamentError;
use crate::qualifiers::QualifierSet;

/// What a successful tournament run produced.
#[derive(Debug, Clone)]
pub struct TournamentOutcome {
    pub qualifiers: QualifierSet,
    /// Per-country results, in country order
    pub countries: Vec<CountryResult>,
}

/// Validate the topology, run every country in parallel and gather qualifiers.
///
/// `workers` is the number of participants actually launched; it must equal
/// `config.countries` or nothing is simulated. Any worker failure fails the
/// whole run once every worker has stopped.
pub async fn run_tournament(
    config: &TournamentConfig,
    workers: usize,
) -> Result<TournamentOutcome, TournamentError> {
    config.validate()?;
    config.check_workers(workers)?;

    let runner = CountryRunner::new(config, config.seed.unwrap_or_else(clock_seed));
    runner.layout().prepare()?;
    let runner = Arc::new(runner);

    info!(
        countries = config.countries,
        teams = config.teams_per_country,
        roster = config.roster_size,
        squad = config.squad_size,
        seeded = config.seed.is_some(),
        "tournament starting"
    );

    let (sender, coordinator) = Coordinator::new(config.countries);
    let handles: Vec<_> = (0..config.countries)
        .map(|country| {
            let runner = Arc::clone(&runner);
            let sender = sender.clone();
            tokio::task::spawn_blocking(move || run_worker(&runner, &sender, country))
        })
        .collect();
    // Only workers hold senders now, so the gather ends if they all stop
    drop(sender);

    let gathered = coordinator.gather().await;

    let mut countries = Vec::with_capacity(handles.len());
    let mut first_error = None;
    for (country, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(Ok(result)) => countries.push(result),
            Ok(Err(e)) => {
                error!(country, error = %e, "country worker failed");
                first_error.get_or_insert(e);
            }
            Err(join_error) => {
                error!(country, error = %join_error, "country worker panicked");
                first_error.get_or_insert(TournamentError::WorkerPanicked { country });
            }
        }
    }

    if let Some(e) = first_error {
        return Err(e);
    }
    let qualifiers = gathered?;

    Ok(TournamentOutcome {
        qualifiers,
        countries,
    })
}

fn run_worker(
    runner: &CountryRunner,
    sender: &ReportSender,
    country: CountryId,
) -> Result<CountryResult, TournamentError> {
    let result = runner.run(country)?;
    sender.submit_blocking(result.report()?)?;
    Ok(result)
}
