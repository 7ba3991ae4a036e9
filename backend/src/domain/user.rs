//! User record served by the search endpoint.

use serde::Serialize;
use user_dataset::{DatasetRecord, Gender};

/// Immutable user record held by the store for the life of the process.
///
/// Serialises as `{"id", "name", "age", "about", "gender"}`; `name` is the
/// given and family name joined with one space at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: u32,
    name: String,
    age: u32,
    about: String,
    gender: Gender,
}

impl User {
    /// Construct a user from already-derived parts.
    pub fn new(id: u32, name: impl Into<String>, age: u32, about: impl Into<String>, gender: Gender) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            about: about.into(),
            gender,
        }
    }

    /// Stable unique identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Full display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Age in whole years.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Free-text biography.
    pub fn about(&self) -> &str {
        &self.about
    }

    /// Recorded gender.
    pub fn gender(&self) -> Gender {
        self.gender
    }
}

impl From<DatasetRecord> for User {
    fn from(record: DatasetRecord) -> Self {
        let name = record.full_name();
        Self {
            id: record.id,
            name,
            age: record.age,
            about: record.about,
            gender: record.gender,
        }
    }
}
