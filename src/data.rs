use std::path::PathBuf;

use thiserror::Error;

/// The record found on the first line of a pivot file. All three fields are
/// kept as plain strings: dates are compared by exact equality against the
/// run's date string, and the value is only ever displayed, never computed
/// with, so parsing any of them would add failure modes for zero benefit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PivotRecord {
    pub computation_date: String,
    pub consumption_date: String,
    pub value: String,
}

/// Time-of-day context for a run. The morning run checks that yesterday's
/// pivot was consumed before today's order placement; the evening run checks
/// that today's pivot computation completed. Which `PivotRecord` field gets
/// compared follows from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Period {
    Morning,
    Evening,
}

/// Immutable per-invocation context, built once in `main` and passed by
/// reference all the way down. Deliberately not part of the config file:
/// the date comes from the clock and the period from argv.
#[derive(Debug, Clone)]
pub(crate) struct RunContext {
    /// Today, formatted `YYYY/MM/DD` to match what the pivot producer writes.
    pub today: String,
    pub period: Period,
}

/// Per-currency classification for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    Ok,
    Error,
}

/// One row of the report: a single currency checked against today's date.
/// Immutable once built; only the renderer consumes it. For currencies whose
/// file couldn't be read at all, every string field is empty and the status
/// is `Error` - the row still renders, with blank cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CurrencyOutcome {
    pub currency: String,
    pub expected_date: String,
    /// The record field selected by the period. This is both the comparison
    /// target and the displayed value; the pivot files carry no second,
    /// independently-observed date.
    pub observed_date: String,
    pub value: String,
    pub status: Status,
}

/// What one account contributes to the final report: its rendered table
/// fragment plus how many of its currencies failed the check.
#[derive(Debug)]
pub(crate) struct AccountReport {
    pub number: String,
    pub fragment: String,
    pub error_count: usize,
}

/// The two ways reading a pivot file can fail. Both are converted to an
/// ERROR outcome row at the evaluator boundary; neither ever aborts a run.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("cannot read pivot file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("pivot file {path}: expected 3 `;`-separated fields on the first line, found {fields}")]
    MalformedRecord { path: PathBuf, fields: usize },
}
