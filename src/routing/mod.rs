//! Client-Side Routing
//!
//! Maps URL paths to the portfolio's views through an explicit, ordered
//! route table instead of relying on a router library's precedence rules.
//!
//! # Routes
//!
//! - `/` - Home
//! - `/about` - About
//! - `/projects` - Project list
//! - `/projects/:id` - Project detail
//!
//! # Matching
//!
//! Patterns are kept most-specific-first: comparing segment by segment, a
//! literal outranks a parameter, so `/projects/new` would win over
//! `/projects/:id` no matter which was registered first. Two patterns with
//! the same shape cannot both be registered. The first matching entry wins.

pub mod error;
pub mod pattern;
pub mod site;
pub mod table;

pub use error::{RouteError, RouteResult};
pub use pattern::{Params, RoutePattern, Segment};
pub use site::{Route, RouteKind, SiteRouter};
pub use table::{RouteMatch, RouteTable};
