//! Project Card Component
//!
//! One cell of the project grid.

use folio::listing::ProjectCard as Card;
use leptos::*;
use leptos_router::*;

/// Summary card: picture, name, year, and a link to the detail page
#[component]
pub fn ProjectCard(card: Card) -> impl IntoView {
    let Card {
        name,
        year,
        picture,
        href,
        ..
    } = card;
    let alt = name.clone();

    view! {
        <div class="bg-gray-800 rounded-xl overflow-hidden border border-gray-700 hover:border-gray-600 transition-colors flex flex-col">
            <img
                src=picture
                alt=alt
                class="w-full h-48 object-cover bg-gray-700"
            />
            <div class="p-4 flex flex-col flex-1">
                <h5 class="text-lg font-semibold">{name}</h5>
                <p class="text-gray-400 text-sm mt-1 flex-1">{year}</p>
                <A
                    href=href
                    class="mt-4 self-start px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm font-medium transition-colors"
                >
                    "View Details"
                </A>
            </div>
        </div>
    }
}
