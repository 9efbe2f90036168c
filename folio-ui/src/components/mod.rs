//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod nav;
pub mod project_card;

pub use nav::Nav;
pub use project_card::ProjectCard;
