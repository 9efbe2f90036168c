//! Project Detail
//!
//! Resolves a route parameter to a project record.
//!
//! `DetailView` is keyed on the parameter it last resolved: feeding it a
//! different id re-runs the lookup, feeding it the same id does nothing.
//! A view instance reused across `/projects/a` -> `/projects/b` therefore
//! always shows the record for the current path.

use serde::Serialize;

use crate::catalog::{Dataset, Project};

/// Heading shown when the id matches no project
pub const NOT_FOUND_HEADING: &str = "Project not found";

/// Where the detail view is in its lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailState {
    /// Nothing resolved yet
    #[default]
    Unresolved,
    /// The id matched this record
    Resolved(Project),
    /// No record has this id
    NotFound { id: String },
}

impl DetailState {
    pub fn project(&self) -> Option<&Project> {
        match self {
            DetailState::Resolved(project) => Some(project),
            _ => None,
        }
    }

    /// Heading text for this state
    pub fn heading(&self) -> &str {
        match self {
            DetailState::Unresolved => "",
            DetailState::Resolved(project) => project.name.as_str(),
            DetailState::NotFound { .. } => NOT_FOUND_HEADING,
        }
    }

    /// Fields to display; empty unless resolved
    pub fn fields(&self) -> DetailFields {
        self.project().map(DetailFields::from).unwrap_or_default()
    }
}

/// Look up `id`: first record in dataset order wins
pub fn resolve(dataset: &Dataset, id: &str) -> DetailState {
    match dataset.find(id) {
        Some(project) => {
            tracing::debug!(id, name = %project.name, "Resolved project");
            DetailState::Resolved(project.clone())
        }
        None => {
            tracing::debug!(id, "No project with this id");
            DetailState::NotFound { id: id.to_string() }
        }
    }
}

/// Detail state keyed on the route parameter that produced it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailView {
    key: Option<String>,
    state: DetailState,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `id` unless it is the id already resolved
    ///
    /// Returns `true` when the lookup ran.
    pub fn resolve(&mut self, dataset: &Dataset, id: &str) -> bool {
        if self.key.as_deref() == Some(id) {
            return false;
        }

        self.state = resolve(dataset, id);
        self.key = Some(id.to_string());
        true
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// The id the current state was resolved from
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn fields(&self) -> DetailFields {
        self.state.fields()
    }
}

/// Displayed fields of the detail page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailFields {
    pub picture: String,
    pub name: String,
    pub year: i32,
    pub technologies: String,
    pub description: String,
}

impl From<&Project> for DetailFields {
    fn from(project: &Project) -> Self {
        Self {
            picture: project.picture.clone(),
            name: project.name.clone(),
            year: project.year,
            technologies: project.technologies.clone(),
            description: project.description.clone(),
        }
    }
}
