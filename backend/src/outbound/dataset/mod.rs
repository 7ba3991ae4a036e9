//! Dataset-backed user store.
//!
//! The dataset file is read and converted exactly once, before the server
//! starts accepting requests. Afterwards every `load_all` hands out the same
//! shared slice.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use user_dataset::Dataset;

use crate::domain::User;
use crate::domain::ports::{UserStore, UserStoreError};

/// Process-wide immutable user sequence loaded from a dataset file.
#[derive(Debug, Clone)]
pub struct DatasetUserStore {
    users: Arc<[User]>,
}

impl DatasetUserStore {
    /// Read and validate the dataset at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`UserStoreError::Unavailable`] when the file cannot be read
    /// or does not match the dataset schema.
    pub fn open(path: &Path) -> Result<Self, UserStoreError> {
        let dataset =
            Dataset::from_file(path).map_err(|err| UserStoreError::unavailable(err.to_string()))?;
        info!(path = %path.display(), records = dataset.len(), "user dataset loaded");
        Ok(Self::from_dataset(dataset))
    }

    /// Convert an already-parsed dataset, keeping row order.
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self::from_users(dataset.into_records().into_iter().map(User::from).collect())
    }

    /// Wrap users that are already in domain form.
    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::from(users),
        }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for DatasetUserStore {
    async fn load_all(&self) -> Result<Arc<[User]>, UserStoreError> {
        Ok(Arc::clone(&self.users))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    use rstest::rstest;
    use tempfile::NamedTempFile;
    use user_dataset::bundled_fixture_path;

    fn dataset_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp dataset");
        file.write_all(contents.as_bytes()).expect("write temp dataset");
        file
    }

    #[tokio::test]
    async fn bundled_dataset_keeps_file_order() {
        let store = DatasetUserStore::open(&bundled_fixture_path()).expect("fixture loads");
        assert_eq!(store.len(), 25);

        let users = store.load_all().await.expect("load");
        let ids: Vec<u32> = users.iter().map(User::id).collect();
        assert_eq!(ids, (0..25).collect::<Vec<_>>());
        assert_eq!(users[0].name(), "Boyd Wolf");
    }

    #[tokio::test]
    async fn repeated_loads_share_one_sequence() {
        let store = DatasetUserStore::open(&bundled_fixture_path()).expect("fixture loads");
        let first = store.load_all().await.expect("load");
        let second = store.load_all().await.expect("load");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let error = DatasetUserStore::open(&PathBuf::from("/nonexistent/users.json"))
            .expect_err("must fail");
        assert!(matches!(error, UserStoreError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn dataset_file_maps_names_and_keeps_order() {
        let file = dataset_file(
            r#"{"version":1,"rows":[
                {"id":7,"first_name":"Ada","last_name":"Byron","age":36,"about":"Maths.","gender":"female"},
                {"id":3,"first_name":"Alan","last_name":"Turing","age":41,"about":"Logic.","gender":"male"}
            ]}"#,
        );

        let store = DatasetUserStore::open(file.path()).expect("dataset loads");
        let users = store.load_all().await.expect("load");

        let names: Vec<&str> = users.iter().map(User::name).collect();
        assert_eq!(names, vec!["Ada Byron", "Alan Turing"]);
    }

    #[rstest]
    #[case::truncated(r#"{"version":1,"rows":[{"id":0"#)]
    #[case::wrong_version(r#"{"version":2,"rows":[]}"#)]
    #[case::duplicate_ids(
        r#"{"version":1,"rows":[
            {"id":1,"first_name":"A","last_name":"B","age":1,"about":"","gender":"male"},
            {"id":1,"first_name":"C","last_name":"D","age":2,"about":"","gender":"female"}
        ]}"#
    )]
    fn malformed_dataset_is_unavailable(#[case] contents: &str) {
        let file = dataset_file(contents);

        let error = DatasetUserStore::open(file.path()).expect_err("must fail");

        assert!(matches!(error, UserStoreError::Unavailable { .. }));
    }
}
