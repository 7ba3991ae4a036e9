//! Dataset document parsing and validation.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::DatasetError;
use crate::record::DatasetRecord;

/// Current supported dataset version.
const SUPPORTED_VERSION: u32 = 1;

/// Path of the 25-row dataset bundled with this crate.
///
/// Used as the default dataset location and by tests that need a realistic
/// store.
#[must_use]
pub fn bundled_fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("users.json")
}

/// A validated, ordered collection of user rows.
///
/// Row order is file order and is never changed after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<DatasetRecord>,
}

impl Dataset {
    /// Parses a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if:
    /// - The JSON is malformed or a row does not match the schema
    /// - The version is unsupported
    /// - Two rows share an identifier
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(json).map_err(|e| DatasetError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let contents = fs::read_to_string(path).map_err(|e| DatasetError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawDataset) -> Result<Self, DatasetError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(DatasetError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let mut seen = HashSet::with_capacity(raw.rows.len());
        if let Some(duplicate) = raw.rows.iter().find(|row| !seen.insert(row.id)) {
            return Err(DatasetError::DuplicateId { id: duplicate.id });
        }

        Ok(Self { records: raw.rows })
    }

    /// Rows in file order.
    #[must_use]
    pub fn records(&self) -> &[DatasetRecord] {
        &self.records
    }

    /// Consumes the dataset, yielding rows in file order.
    #[must_use]
    pub fn into_records(self) -> Vec<DatasetRecord> {
        self.records
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDataset {
    version: u32,
    rows: Vec<DatasetRecord>,
}
