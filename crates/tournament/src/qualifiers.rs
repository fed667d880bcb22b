//! Qualifier table and the coordinator's report

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use league_core::{TeamId, QUALIFIERS_PER_COUNTRY};

use crate::coordinator::QualifierReport;
use crate::country::CountryId;
use crate::error::TournamentError;

/// Qualifying teams per country, in country order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifierSet {
    /// Number of countries expected
    pub countries: usize,
    /// Top two team ids per country, best first
    pub qualifiers: BTreeMap<CountryId, [TeamId; QUALIFIERS_PER_COUNTRY]>,
}

impl QualifierSet {
    pub fn new(countries: usize) -> Self {
        Self {
            countries,
            qualifiers: BTreeMap::new(),
        }
    }

    /// Record one country's report. Each country may report once.
    pub fn insert(&mut self, report: QualifierReport) -> Result<(), TournamentError> {
        if report.country >= self.countries {
            return Err(TournamentError::UnknownCountry {
                country: report.country,
                countries: self.countries,
            });
        }
        if self.qualifiers.contains_key(&report.country) {
            return Err(TournamentError::DuplicateReport {
                country: report.country,
            });
        }
        self.qualifiers.insert(report.country, report.qualifiers);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.qualifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qualifiers.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.qualifiers.len() == self.countries
    }

    pub fn get(&self, country: CountryId) -> Option<[TeamId; QUALIFIERS_PER_COUNTRY]> {
        self.qualifiers.get(&country).copied()
    }

    /// Generate the text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(
            "Fase de liga completada. Los mejores equipos de cada país avanzan a la eliminatoria.\n",
        );
        for (country, [first, second]) in &self.qualifiers {
            report.push_str(&format!(
                "País {}: Equipo {} y Equipo {} avanzan\n",
                country, first, second
            ));
        }
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        print!("{}", self.generate_report());
    }

    /// Save as JSON
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json =
            serde_json::to_string_pretty(self).map_err(|source| TournamentError::SummaryJson {
                path: path.to_path_buf(),
                source,
            })?;
        std::fs::write(path, json).map_err(|source| TournamentError::SummaryIo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a summary written by [`QualifierSet::save`]
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| TournamentError::SummaryIo {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&contents).map_err(|source| TournamentError::SummaryJson {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "qualifiers_tests.rs"]
mod qualifiers_tests;
