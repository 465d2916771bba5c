//! # History Reporter
//!
//! Renders an [`EvolutionHistory`] as a tab separated table with one row per
//! generation and one column per run, followed by the average across the runs
//! that reached that generation. Runs that ended early show a placeholder.
//!
//! ```text
//! History of best values:
//! Gen.    Run 1   Run 2   Av.
//! 1       15.25   14.75   15.00
//! 2       16.00   -       16.00
//! ```
//!
//! Reporting is read-only: nothing here touches engine state.

use std::io::{self, Write};

use crate::{
    error::{Result, ResultExt},
    history::{EvolutionHistory, HistoryAttribute},
};

/// Printed in place of a value for runs that stopped before a generation.
pub const ABSENT_PLACEHOLDER: &str = "-";

/// One generation of a history table.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    /// 0-based generation index.
    pub generation: usize,
    /// The attribute value of each run, `None` where the run had already ended.
    pub values: Vec<Option<f64>>,
    /// Mean of the present values.
    pub average: f64,
}

impl HistoryRow {
    /// Number of runs that reached this generation.
    pub fn present(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }
}

/// Builds the table rows for `attribute`, stopping at the first generation no
/// run reached.
pub fn history_rows(history: &EvolutionHistory, attribute: HistoryAttribute) -> Vec<HistoryRow> {
    let mut rows = Vec::with_capacity(history.max_generations());

    for generation in 0.. {
        let values: Vec<Option<f64>> = history
            .iter()
            .map(|run| run.get(generation).map(|record| record.get(attribute)))
            .collect();

        let (sum, count) = values
            .iter()
            .flatten()
            .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
        if count == 0 {
            break;
        }

        rows.push(HistoryRow {
            generation,
            values,
            average: sum / count as f64,
        });
    }

    rows
}

/// Writes the history table for `attribute` to `out`.
pub fn write_history<W: Write>(
    out: &mut W,
    history: &EvolutionHistory,
    attribute: HistoryAttribute,
) -> Result<()> {
    writeln!(out, "History of {} values:", attribute).context("Failed to write history title")?;

    let mut header = String::from("Gen.");
    for run in 1..=history.len() {
        header.push_str(&format!("\tRun {}", run));
    }
    writeln!(out, "{}\tAv.", header).context("Failed to write history header")?;

    for row in history_rows(history, attribute) {
        let mut line = (row.generation + 1).to_string();
        for value in &row.values {
            match value {
                Some(value) => line.push_str(&format!("\t{:.2}", value)),
                None => {
                    line.push('\t');
                    line.push_str(ABSENT_PLACEHOLDER);
                }
            }
        }
        writeln!(out, "{}\t{:.2}", line, row.average).context("Failed to write history row")?;
    }

    writeln!(out).context("Failed to write history trailer")?;
    Ok(())
}

/// Prints the history table for `attribute` to stdout.
pub fn dump_history(history: &EvolutionHistory, attribute: HistoryAttribute) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_history(&mut lock, history, attribute)?;
    lock.flush()?;
    Ok(())
}
