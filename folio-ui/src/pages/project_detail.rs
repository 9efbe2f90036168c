//! Project Detail Page
//!
//! Shows one project. The id arrives as a signal; the page keeps a
//! `DetailView` in a memo keyed on it, so navigating between detail paths
//! re-resolves without remounting.

use folio::catalog::Dataset;
use folio::detail::{DetailFields, DetailState, DetailView, NOT_FOUND_HEADING};
use leptos::*;
use leptos_router::*;

use crate::state::catalog::use_catalog;

/// Project detail page
#[component]
pub fn ProjectDetail(
    /// Project id from the current path
    #[prop(into)]
    id: Signal<String>,
) -> impl IntoView {
    let detail = detail_memo(use_catalog(), id);

    view! {
        <div class="max-w-3xl mx-auto">
            {move || match detail.with(|view| view.state().clone()) {
                DetailState::Resolved(project) => {
                    view! { <ProjectFields fields=DetailFields::from(&project) /> }.into_view()
                }
                DetailState::NotFound { id } => view! { <ProjectNotFound id=id /> }.into_view(),
                DetailState::Unresolved => {
                    view! { <ProjectFields fields=DetailFields::default() /> }.into_view()
                }
            }}
        </div>
    }
}

/// Detail state that follows `id`, reusing the previous `DetailView`
fn detail_memo(catalog: Dataset, id: Signal<String>) -> Memo<DetailView> {
    create_memo(move |prev: Option<&DetailView>| {
        let mut view = prev.cloned().unwrap_or_default();
        view.resolve(&catalog, &id.get());
        view
    })
}

/// Picture, heading, year, technologies, description
#[component]
fn ProjectFields(fields: DetailFields) -> impl IntoView {
    let DetailFields {
        picture,
        name,
        year,
        technologies,
        description,
    } = fields;
    let alt = name.clone();

    view! {
        <article class="space-y-6">
            <img src=picture alt=alt class="w-full rounded-xl bg-gray-800" />
            <h2 class="text-3xl font-bold">{name}</h2>
            <p class="text-gray-400">{year}</p>
            <p class="text-primary-400">{technologies}</p>
            <p class="text-gray-300 leading-relaxed">{description}</p>
            <BackToProjects />
        </article>
    }
}

/// Unknown id
#[component]
fn ProjectNotFound(id: String) -> impl IntoView {
    view! {
        <div class="text-center py-12 space-y-4">
            <h2 class="text-3xl font-bold">{NOT_FOUND_HEADING}</h2>
            <p class="text-gray-400">"No project has the id \"" {id} "\"."</p>
            <BackToProjects />
        </div>
    }
}

#[component]
fn BackToProjects() -> impl IntoView {
    view! {
        <A href="/projects" class="inline-block text-primary-400 hover:text-primary-300">
            "← Back to projects"
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_follows_id_signal() {
        let runtime = create_runtime();

        let id = create_rw_signal("trex".to_string());
        let detail = detail_memo(Dataset::bundled().unwrap(), id.into());
        let heading = move || detail.with(|view| view.state().heading().to_string());

        assert_eq!(heading(), "T-Rex Landing Page");

        id.set("velociraptor".to_string());
        assert_eq!(heading(), "Velociraptor Game");
        assert_eq!(
            detail.with(|view| view.key().map(str::to_string)),
            Some("velociraptor".to_string())
        );

        id.set("does-not-exist".to_string());
        assert_eq!(heading(), NOT_FOUND_HEADING);

        runtime.dispose();
    }
}
