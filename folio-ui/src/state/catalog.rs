//! Catalog Context
//!
//! The dataset is loaded once in `App` and handed to pages through Leptos
//! context, so pages never reach for a global and tests can provide a
//! fixture dataset instead.

use folio::catalog::Dataset;
use leptos::*;

/// Make `dataset` available to every component below the caller
pub fn provide_catalog(dataset: Dataset) {
    provide_context(dataset);
}

/// The dataset provided by `App`
pub fn use_catalog() -> Dataset {
    use_context::<Dataset>().expect("Dataset not found")
}
