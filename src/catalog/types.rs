//! Core data types for the project catalog

use serde::{Deserialize, Serialize};

/// A single portfolio project
///
/// `id` is the routing key; every other field is display data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Project {
    /// Unique identifier, used in `/projects/{id}`
    pub id: String,
    /// Display title
    pub name: String,
    /// Year the project was built
    pub year: i32,
    /// Free-text list of technologies
    pub technologies: String,
    /// Longer description
    pub description: String,
    /// URI of the project's picture
    pub picture: String,
}

impl Project {
    /// Create a project with the given id and name; other fields empty
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder method: set year
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Builder method: set technologies
    pub fn technologies(mut self, technologies: impl Into<String>) -> Self {
        self.technologies = technologies.into();
        self
    }

    /// Builder method: set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method: set picture URI
    pub fn picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = picture.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_builder() {
        let project = Project::new("trex", "T-Rex Landing Page")
            .year(2020)
            .technologies("HTML, CSS")
            .picture("/images/trex.png");

        assert_eq!(project.id, "trex");
        assert_eq!(project.year, 2020);
        assert_eq!(project.technologies, "HTML, CSS");
        assert!(project.description.is_empty());
    }

    #[test]
    fn test_project_deserialize() {
        let json = r#"{
            "id": "trex",
            "name": "T-Rex Landing Page",
            "year": 2020,
            "technologies": "HTML, CSS",
            "description": "Landing page",
            "picture": "/images/trex.png"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.name, "T-Rex Landing Page");
        assert_eq!(project.year, 2020);
    }

    #[test]
    fn test_project_missing_field_rejected() {
        let json = r#"{"id": "trex", "name": "T-Rex Landing Page"}"#;
        assert!(serde_json::from_str::<Project>(json).is_err());
    }
}
