//! Dataset loading and lookup
//!
//! A `Dataset` is loaded once, in full, and never mutated afterwards.
//! Clones share the same backing slice, so handing one to every view
//! (through a Leptos context or the host's `AppState`) is cheap.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use super::error::{CatalogError, CatalogResult};
use super::types::Project;

/// Project records compiled into the binary
const BUNDLED_PROJECTS: &str = include_str!("../../data/projects.json");

/// Immutable, ordered collection of projects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    projects: Arc<[Project]>,
}

/// An id that appears more than once, with every position it occupies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    pub id: String,
    pub positions: Vec<usize>,
}

impl Dataset {
    /// Load the dataset bundled with the application
    pub fn bundled() -> CatalogResult<Self> {
        Self::from_json_str(BUNDLED_PROJECTS)
    }

    /// Parse a JSON array of project records
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        tracing::debug!(count = projects.len(), "Loaded project dataset");
        Ok(Self::from_projects(projects))
    }

    /// Read and parse a dataset file
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Wrap already-built records (fixtures, tests)
    pub fn from_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: projects.into(),
        }
    }

    /// All records, in dataset order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Owned copy of every record, detached from this dataset
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.to_vec()
    }

    /// First record whose id equals `id`
    ///
    /// Linear scan in dataset order; with duplicate ids the earliest wins.
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Every id that occurs more than once, ordered by first occurrence
    pub fn duplicate_ids(&self) -> Vec<DuplicateId> {
        let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
        let mut order = Vec::new();

        for (index, project) in self.projects.iter().enumerate() {
            let seen = positions.entry(project.id.as_str()).or_default();
            if seen.is_empty() {
                order.push(project.id.as_str());
            }
            seen.push(index);
        }

        order
            .into_iter()
            .filter_map(|id| {
                let found = &positions[id];
                (found.len() > 1).then(|| DuplicateId {
                    id: id.to_string(),
                    positions: found.clone(),
                })
            })
            .collect()
    }

    /// Fail on the first duplicated id
    pub fn validate(&self) -> CatalogResult<()> {
        match self.duplicate_ids().into_iter().next() {
            Some(dup) => {
                tracing::warn!(id = %dup.id, positions = ?dup.positions, "Duplicate project id");
                Err(CatalogError::DuplicateId {
                    id: dup.id,
                    first: dup.positions[0],
                    second: dup.positions[1],
                })
            }
            None => Ok(()),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}
