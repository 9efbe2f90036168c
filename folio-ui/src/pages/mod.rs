//! Pages
//!
//! Top-level page components for each route.

pub mod about;
pub mod home;
pub mod project_detail;
pub mod projects;

pub use about::About;
pub use home::Home;
pub use project_detail::ProjectDetail;
pub use projects::ProjectList;
