//! Error type for dataset loading.
//!
//! Every variant means the record source is unusable; callers surface it as
//! a server fault rather than retrying.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading or validating a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file at '{path}': {message}")]
    IoError {
        /// Path to the dataset file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The dataset JSON is malformed or does not match the row schema.
    #[error("invalid dataset JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The dataset version is not supported.
    #[error("unsupported dataset version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the file.
        actual: u32,
    },

    /// Two rows share the same identifier.
    #[error("duplicate user id {id} in dataset")]
    DuplicateId {
        /// The repeated identifier.
        id: u32,
    },
}
