//! # History
//!
//! Fitness summaries recorded while evolving. A [`GenerationRecord`] is taken
//! once per completed generation from the surviving children, a [`RunHistory`]
//! collects the records of one run (index 0 is the first completed
//! generation; the initial population is never recorded), and an
//! [`EvolutionHistory`] collects one run history per run, indexed by
//! `run number - 1`.

use std::fmt;
use std::str::FromStr;

use crate::error::{GeneticError, Result};

/// Best and average fitness of the survivors of one generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationRecord {
    pub best: f64,
    pub average: f64,
}

impl GenerationRecord {
    pub fn new(best: f64, average: f64) -> Self {
        Self { best, average }
    }

    /// Reads the value of the given attribute.
    pub fn get(&self, attribute: HistoryAttribute) -> f64 {
        match attribute {
            HistoryAttribute::Best => self.best,
            HistoryAttribute::Average => self.average,
        }
    }
}

/// Selects which value of a [`GenerationRecord`] to report.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryAttribute {
    Best,
    Average,
}

impl fmt::Display for HistoryAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryAttribute::Best => f.write_str("best"),
            HistoryAttribute::Average => f.write_str("average"),
        }
    }
}

impl FromStr for HistoryAttribute {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "best" => Ok(HistoryAttribute::Best),
            "average" => Ok(HistoryAttribute::Average),
            other => Err(GeneticError::Configuration(format!(
                "Unknown history attribute '{}', expected 'best' or 'average'",
                other
            ))),
        }
    }
}

/// The records of one run, one per completed generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunHistory {
    records: Vec<GenerationRecord>,
}

impl RunHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: GenerationRecord) {
        self.records.push(record);
    }

    /// Returns the record of the given 0-based generation, if the run got that far.
    pub fn get(&self, generation: usize) -> Option<&GenerationRecord> {
        self.records.get(generation)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GenerationRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&GenerationRecord> {
        self.records.last()
    }
}

impl From<Vec<GenerationRecord>> for RunHistory {
    fn from(records: Vec<GenerationRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a RunHistory {
    type Item = &'a GenerationRecord;
    type IntoIter = std::slice::Iter<'a, GenerationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// One [`RunHistory`] per run. Index 0 holds run number 1.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvolutionHistory {
    runs: Vec<RunHistory>,
}

impl EvolutionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(runs: usize) -> Self {
        Self {
            runs: Vec::with_capacity(runs),
        }
    }

    pub fn push(&mut self, run: RunHistory) {
        self.runs.push(run);
    }

    /// Returns the history of the run at the given 0-based index.
    pub fn get(&self, index: usize) -> Option<&RunHistory> {
        self.runs.get(index)
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn runs(&self) -> &[RunHistory] {
        &self.runs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RunHistory> {
        self.runs.iter()
    }

    /// Length of the longest run.
    pub fn max_generations(&self) -> usize {
        self.runs.iter().map(RunHistory::len).max().unwrap_or(0)
    }

    /// Prints the given attribute to stdout, see [`crate::report::dump_history`].
    pub fn dump(&self, attribute: HistoryAttribute) -> Result<()> {
        crate::report::dump_history(self, attribute)
    }
}

impl From<Vec<RunHistory>> for EvolutionHistory {
    fn from(runs: Vec<RunHistory>) -> Self {
        Self { runs }
    }
}

impl<'a> IntoIterator for &'a EvolutionHistory {
    type Item = &'a RunHistory;
    type IntoIter = std::slice::Iter<'a, RunHistory>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}
