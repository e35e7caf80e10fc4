// Error taxonomy for the analysis library.
//
// Every variant is fatal to a run: this is a batch diagnostic over finished
// pipeline output, so there is no retry or partial-result path. The binary
// wraps these in anyhow for CLI-level context.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while reading vector files, ARFF annotations, or syslogs.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// No file in `dir` matched the expected name prefix.
    #[error("No files matching '{pattern}*' found in {}", .dir.display())]
    FileNotFound { dir: PathBuf, pattern: String },

    /// A line did not have the expected shape.
    #[error("Malformed record at {}:{line}: {reason}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        /// 1-based line number
        line: usize,
        reason: String,
    },

    /// Instance id outside the 1..=max range annotated in the ARFF file.
    #[error("Unknown instance id {id} (ARFF file annotates instances 1..={max})")]
    UnknownInstanceId { id: usize, max: usize },

    /// A word pair string that is not exactly two comma-separated words.
    #[error("Malformed word pair '{input}': expected 'word1,word2'")]
    MalformedPair { input: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProbeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
