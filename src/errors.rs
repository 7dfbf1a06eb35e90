use crate::balance::BalanceType;
use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("{0} calibration is not implemented")]
    Unimplemented(BalanceType),

    #[error("unrecognized balance selector {0} (expected 0..=3)")]
    UnknownBalanceIndex(i64),

    #[error("unrecognized balance type \"{0}\"")]
    UnknownBalanceName(String),

    #[error("invalid {name} column range {start}..={end}: {reason}")]
    InvalidColumnRange {
        name: &'static str,
        start: usize,
        end: usize,
        reason: &'static str,
    },

    #[error("failed to read run configuration {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to parse run configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum InputFormatError {
    #[error(transparent)]
    Layout(#[from] ConfigurationError),

    #[error("failed to read {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed record in {path:?}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("{path:?} line {line}: \"{field}\" is not a number: {source}")]
    ParseFloat {
        path: PathBuf,
        line: u64,
        field: String,
        source: ParseFloatError,
    },

    #[error("{path:?} line {line}: column {column} requested but only {available} present")]
    ColumnOutOfBounds {
        path: PathBuf,
        line: u64,
        column: usize,
        available: usize,
    },

    #[error("{path:?} has {lines} lines, fewer than {header} header + {footer} footer rows")]
    TooShort {
        path: PathBuf,
        lines: usize,
        header: usize,
        footer: usize,
    },

    #[error("{path:?} contains no data rows")]
    Empty { path: PathBuf },

    #[error("{columns} angle column(s) per row, alpha and beta need at least 2")]
    TooFewAngleColumns { columns: usize },

    #[error("static table has {static_rows} rows but dynamic table has {dynamic_rows}")]
    RowCountMismatch {
        static_rows: usize,
        dynamic_rows: usize,
    },
}

#[derive(Debug, Error)]
pub enum OutputWriteError {
    #[error("failed to write {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// Everything that can stop a reduction run.
#[derive(Debug, Error)]
pub enum ReductionError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    InputFormat(#[from] InputFormatError),

    #[error(transparent)]
    OutputWrite(#[from] OutputWriteError),
}
