//! Per-row schema of the dataset file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gender recorded for a user row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// `male` in the dataset.
    Male,
    /// `female` in the dataset.
    Female,
}

impl Gender {
    /// Wire representation used by the dataset and the HTTP API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user row exactly as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetRecord {
    /// Unique, stable identifier.
    pub id: u32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in whole years.
    pub age: u32,
    /// Free-text biography.
    pub about: String,
    /// Recorded gender.
    pub gender: Gender,
}

impl DatasetRecord {
    /// Display name formed by joining the given and family names with a
    /// single space.
    ///
    /// # Examples
    /// ```
    /// use user_dataset::{DatasetRecord, Gender};
    ///
    /// let record = DatasetRecord {
    ///     id: 1,
    ///     first_name: "Hilda".to_owned(),
    ///     last_name: "Mayer".to_owned(),
    ///     age: 21,
    ///     about: String::new(),
    ///     gender: Gender::Female,
    /// };
    /// assert_eq!(record.full_name(), "Hilda Mayer");
    /// ```
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
