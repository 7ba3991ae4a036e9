//! Static user record dataset for the search service.
//!
//! The dataset is a flat JSON document read once at process start. This crate
//! owns its on-disk schema and validation and stays independent of backend
//! domain types so the service can map records into whatever shape it serves.
//!
//! # Example
//!
//! ```
//! use user_dataset::{Dataset, Gender};
//!
//! let json = r#"{
//!     "version": 1,
//!     "rows": [
//!         {"id": 0, "first_name": "Boyd", "last_name": "Wolf", "age": 22,
//!          "about": "Nulla cillum enim.", "gender": "male"}
//!     ]
//! }"#;
//!
//! let dataset = Dataset::from_json(json).expect("valid dataset");
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(dataset.records()[0].full_name(), "Boyd Wolf");
//! assert_eq!(dataset.records()[0].gender, Gender::Male);
//! ```

mod dataset;
mod error;
mod record;

pub use dataset::{Dataset, bundled_fixture_path};
pub use error::DatasetError;
pub use record::{DatasetRecord, Gender};
