//! # Folio
//!
//! A personal portfolio site in Rust: a homepage, an about page, and a
//! project catalog with detail pages, rendered client-side by `folio-ui`.
//!
//! ## Modules
//!
//! - [`catalog`]: The bundled project dataset
//! - [`routing`]: Explicit route table and the site's routes
//! - [`listing`]: Summary cards for the project grid
//! - [`detail`]: Route-parameter-to-record resolution
//! - [`config`], [`telemetry`], [`server`]: Native-only configuration,
//!   logging, and the static host for the built front end
//!
//! ## Quick Start
//!
//! ```rust
//! use folio::catalog::Dataset;
//! use folio::detail::DetailView;
//! use folio::routing::{Route, SiteRouter};
//!
//! let dataset = Dataset::bundled().unwrap();
//! let router = SiteRouter::new();
//!
//! let route = router.resolve("/projects/trex").unwrap();
//! assert_eq!(route, Route::ProjectDetail { id: "trex".into() });
//!
//! let mut view = DetailView::new();
//! view.resolve(&dataset, route.project_id().unwrap());
//! assert_eq!(view.state().heading(), "T-Rex Landing Page");
//! ```

pub mod catalog;
pub mod detail;
pub mod listing;
pub mod routing;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;

// Re-export top-level types for convenience
pub use catalog::{CatalogError, CatalogResult, Dataset, DuplicateId, Project};

pub use routing::{Params, Route, RouteError, RouteKind, RoutePattern, RouteTable, SiteRouter};

pub use listing::{cards, ProjectCard};

pub use detail::{DetailFields, DetailState, DetailView, NOT_FOUND_HEADING};

#[cfg(not(target_arch = "wasm32"))]
pub use config::{CatalogConfig, Config, ConfigError, LoggingConfig, ServerConfig};

#[cfg(not(target_arch = "wasm32"))]
pub use server::{build_router, serve, AppState, ServerError};
