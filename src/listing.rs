//! Project List
//!
//! Summary cards for the project grid. The list takes an owned snapshot of
//! the dataset when it is built; it is never kept in sync afterwards.

use serde::Serialize;

use crate::catalog::{Dataset, Project};
use crate::routing::Route;

/// One card in the project grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub picture: String,
    /// Deep link to the project's detail page
    pub href: String,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        let href = Route::ProjectDetail {
            id: project.id.clone(),
        }
        .href();

        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            year: project.year,
            picture: project.picture.clone(),
            href,
        }
    }
}

/// One card per record, in dataset order
pub fn cards(dataset: &Dataset) -> Vec<ProjectCard> {
    dataset.iter().map(ProjectCard::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::{DetailState, DetailView};
    use crate::routing::SiteRouter;

    fn fixture(count: usize) -> Dataset {
        Dataset::from_projects(
            (0..count)
                .map(|i| Project::new(format!("p{}", i), format!("Project {}", i)).year(2000 + i as i32))
                .collect(),
        )
    }

    #[test]
    fn test_one_card_per_record_in_order() {
        for size in [0, 1, 5, 12] {
            let dataset = fixture(size);
            let cards = cards(&dataset);

            assert_eq!(cards.len(), dataset.len());
            for (card, project) in cards.iter().zip(dataset.iter()) {
                assert_eq!(card.id, project.id);
                assert_eq!(card.name, project.name);
                assert_eq!(card.year, project.year);
            }
        }
    }

    #[test]
    fn test_card_links_to_detail() {
        let project = Project::new("trex", "T-Rex Landing Page").picture("/images/trex.png");
        let card = ProjectCard::from(&project);

        assert_eq!(card.href, "/projects/trex");
        assert_eq!(card.picture, "/images/trex.png");
    }

    #[test]
    fn test_cards_are_a_snapshot() {
        let dataset = fixture(3);
        let mut cards = cards(&dataset);
        cards[0].name = "Changed".to_string();

        assert_eq!(dataset.projects()[0].name, "Project 0");
    }

    #[test]
    fn test_card_link_navigates_to_its_record() {
        let dataset = Dataset::bundled().unwrap();
        let router = SiteRouter::new();

        for card in cards(&dataset) {
            let route = router.resolve(&card.href).unwrap();
            assert_eq!(route.project_id(), Some(card.id.as_str()));

            let mut view = DetailView::new();
            view.resolve(&dataset, &card.id);
            match view.state() {
                DetailState::Resolved(project) => {
                    assert_eq!(project.id, card.id);
                    assert_eq!(project.name, card.name);
                    assert_eq!(project.year, card.year);
                }
                other => panic!("expected resolved state, got {:?}", other),
            }
        }
    }
}
