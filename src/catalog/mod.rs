//! Project Catalog
//!
//! The portfolio's only data: an ordered, read-only list of project records
//! bundled with the application.
//!
//! ## Components
//!
//! - **Types**: The `Project` record
//! - **Dataset**: Loading, lookup, and duplicate-id validation
//! - **Error**: Load and validation failures

pub mod dataset;
pub mod error;
pub mod types;

pub use dataset::{Dataset, DuplicateId};
pub use error::{CatalogError, CatalogResult};
pub use types::Project;
