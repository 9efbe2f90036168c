//! Projects Page
//!
//! Grid of project cards. The cards are a snapshot of the catalog taken
//! when the page mounts.

use leptos::*;

use crate::components::ProjectCard;
use crate::state::catalog::use_catalog;

/// Project list page
#[component]
pub fn ProjectList() -> impl IntoView {
    let cards = folio::cards(&use_catalog());

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Projects"</h1>
                <p class="text-gray-400 mt-1">"Things I have built"</p>
            </div>

            // One card per project, in catalog order
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {cards
                    .into_iter()
                    .map(|card| view! { <ProjectCard card=card /> })
                    .collect_view()}
            </div>
        </div>
    }
}
