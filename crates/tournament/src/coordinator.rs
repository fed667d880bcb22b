//! All-to-one gather of each country's qualifiers.
//!
//! Workers send exactly one [`QualifierReport`] each. The coordinator waits
//! until every country has reported before building the [`QualifierSet`]:
//! there are no partial results and no timeout, so a worker that never
//! reports and never exits stalls the gather indefinitely.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use league_core::{TeamId, QUALIFIERS_PER_COUNTRY};

use crate::country::CountryId;
use crate::error::TournamentError;
use crate::qualifiers::QualifierSet;

/// A country's top two team ids, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifierReport {
    pub country: CountryId,
    pub qualifiers: [TeamId; QUALIFIERS_PER_COUNTRY],
}

/// Worker-side handle for submitting a report.
#[derive(Debug, Clone)]
pub struct ReportSender {
    tx: mpsc::Sender<QualifierReport>,
}

impl ReportSender {
    /// Submit from a blocking worker thread. Fails only if the coordinator
    /// has already gone away.
    pub fn submit_blocking(&self, report: QualifierReport) -> Result<(), TournamentError> {
        self.tx
            .blocking_send(report)
            .map_err(|_| TournamentError::CoordinatorGone {
                country: report.country,
            })
    }

    pub async fn submit(&self, report: QualifierReport) -> Result<(), TournamentError> {
        self.tx
            .send(report)
            .await
            .map_err(|_| TournamentError::CoordinatorGone {
                country: report.country,
            })
    }
}

/// Receiving end of the gather.
#[derive(Debug)]
pub struct Coordinator {
    required: usize,
    inbox: mpsc::Receiver<QualifierReport>,
}

impl Coordinator {
    /// Coordinator expecting `required` countries, plus the sender workers clone.
    ///
    /// The channel holds one slot per country so no worker ever waits on the
    /// coordinator to submit.
    pub fn new(required: usize) -> (ReportSender, Self) {
        let (tx, inbox) = mpsc::channel(required.max(1));
        (ReportSender { tx }, Self { required, inbox })
    }

    /// Block until every country has reported.
    ///
    /// Fails if all senders are dropped first, or on a duplicate or
    /// out-of-range country.
    pub async fn gather(mut self) -> Result<QualifierSet, TournamentError> {
        let mut set = QualifierSet::new(self.required);
        info!(required = self.required, "coordinator waiting for qualifiers");

        while !set.is_complete() {
            let Some(report) = self.inbox.recv().await else {
                warn!(
                    received = set.len(),
                    required = self.required,
                    "all workers stopped before reporting"
                );
                return Err(TournamentError::WorkerLost {
                    received: set.len(),
                    required: self.required,
                });
            };
            set.insert(report)?;
            debug!(
                country = report.country,
                received = set.len(),
                required = self.required,
                "qualifiers received"
            );
        }

        info!(countries = set.len(), "all qualifiers gathered");
        Ok(set)
    }
}
