//! Error taxonomy for both pipelines.
//!
//! Row-shape violations in aligned CpG files are deliberately *not* errors:
//! they are recovered locally (row dropped, `log::warn!` with file/line/
//! amplicon context) while everything below aborts the run.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal error conditions for the extractor and analyzer pipelines.
#[derive(Error, Debug)]
pub enum AmplimethError {
    /// First line of an aligned CpG file does not match the amplicon
    /// fingerprint. No rows are processed after this.
    #[error("schema mismatch for amplicon {amplicon}: expected fingerprint {expected:?}, got {actual:?}")]
    SchemaMismatch {
        amplicon: u8,
        expected: String,
        actual: String,
    },

    /// Aligned CpG file contains no lines at all.
    #[error("empty input: {path}")]
    EmptyInput { path: PathBuf },

    /// A rate denominator was zero; the ratio is undefined.
    #[error("division undefined at position {position}: {detail}")]
    DivisionUndefined {
        position: String,
        detail: &'static str,
    },

    /// The read-count collaborator failed or returned non-numeric output.
    #[error("external tool error: {message}")]
    ExternalTool { message: String },

    /// Amplicon id outside the registry (valid ids are 1..=5).
    #[error("unknown amplicon id {id} (expected 1..=5)")]
    UnknownAmplicon { id: u8 },

    /// A variant line could not be decoded (missing fields or non-integer
    /// depths). Line numbers are 1-based.
    #[error("malformed variant record at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AmplimethError>;

impl AmplimethError {
    /// Creates an external-tool error with a message.
    pub fn external_tool(message: impl Into<String>) -> Self {
        Self::ExternalTool {
            message: message.into(),
        }
    }

    /// Creates a malformed-record error for a 1-based line number.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }
}
