//! Error types for steel-insight.
//!
//! Only I/O failures are errors. Dirty data (malformed numbers, short rows,
//! empty or constant columns) never produces an `InsightError`; every
//! statistic has a defined fallback value instead.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by steel-insight operations.
#[derive(Debug, Error)]
pub enum InsightError {
    /// The input file could not be opened, read, or decoded as UTF-8.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The report could not be written to its output file.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InsightError {
    /// Path of the file involved in the failed operation.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn read_error_message_names_path() {
        let err = InsightError::Read {
            path: PathBuf::from("missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "failed to read 'missing.csv': no such file");
        assert_eq!(err.path(), std::path::Path::new("missing.csv"));
    }

    #[test]
    fn write_error_exposes_source() {
        let err = InsightError::Write {
            path: PathBuf::from("out/report.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let source = std::error::Error::source(&err).expect("io source");
        assert_eq!(source.to_string(), "denied");
    }
}
