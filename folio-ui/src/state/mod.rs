//! State Management
//!
//! Read-only state shared with the component tree through context.

pub mod catalog;
