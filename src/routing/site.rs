//! The portfolio's route table

use serde::Serialize;

use super::table::RouteTable;
use super::RouteResult;

/// Which view a pattern activates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Home,
    About,
    Projects,
    ProjectDetail,
}

impl RouteKind {
    /// Pattern registered for this view
    pub fn pattern(self) -> &'static str {
        match self {
            RouteKind::Home => "/",
            RouteKind::About => "/about",
            RouteKind::Projects => "/projects",
            RouteKind::ProjectDetail => "/projects/:id",
        }
    }

    /// Human-readable view name
    pub fn label(self) -> &'static str {
        match self {
            RouteKind::Home => "Home",
            RouteKind::About => "About",
            RouteKind::Projects => "Projects",
            RouteKind::ProjectDetail => "Project Detail",
        }
    }

    pub const ALL: [RouteKind; 4] = [
        RouteKind::Home,
        RouteKind::About,
        RouteKind::Projects,
        RouteKind::ProjectDetail,
    ];
}

/// A resolved route with its parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Route {
    Home,
    About,
    Projects,
    ProjectDetail { id: String },
}

impl Route {
    pub fn kind(&self) -> RouteKind {
        match self {
            Route::Home => RouteKind::Home,
            Route::About => RouteKind::About,
            Route::Projects => RouteKind::Projects,
            Route::ProjectDetail { .. } => RouteKind::ProjectDetail,
        }
    }

    /// Canonical path for this route; the project id is percent-encoded
    pub fn href(&self) -> String {
        match self {
            Route::ProjectDetail { id } => format!("/projects/{}", urlencoding::encode(id)),
            other => other.kind().pattern().to_string(),
        }
    }

    /// Project id for detail routes
    pub fn project_id(&self) -> Option<&str> {
        match self {
            Route::ProjectDetail { id } => Some(id),
            _ => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.href())
    }
}

/// Resolves paths to the site's views
#[derive(Debug, Clone)]
pub struct SiteRouter {
    table: RouteTable<RouteKind>,
}

impl SiteRouter {
    pub fn new() -> Self {
        Self {
            table: site_table().expect("site route patterns are well-formed and disjoint"),
        }
    }

    /// Resolve a browser path; `None` means no view answers it
    pub fn resolve(&self, path: &str) -> Option<Route> {
        let matched = self.table.match_path(path)?;

        let route = match matched.handler {
            RouteKind::Home => Route::Home,
            RouteKind::About => Route::About,
            RouteKind::Projects => Route::Projects,
            RouteKind::ProjectDetail => Route::ProjectDetail {
                id: matched.params.get("id")?.to_string(),
            },
        };

        tracing::trace!(path, route = %route, "Resolved route");
        Some(route)
    }

    pub fn table(&self) -> &RouteTable<RouteKind> {
        &self.table
    }
}

impl Default for SiteRouter {
    fn default() -> Self {
        Self::new()
    }
}

fn site_table() -> RouteResult<RouteTable<RouteKind>> {
    RouteKind::ALL
        .into_iter()
        .try_fold(RouteTable::new(), |table, kind| table.route(kind.pattern(), kind))
}
