//! App Root Component
//!
//! Loads the catalog, then renders the page shell and dispatches the
//! current path through `SiteRouter`. `leptos_router` only supplies browser
//! history and `<A>` links; which view renders is decided by the explicit
//! route table in the `folio` crate.

use folio::catalog::Dataset;
use folio::routing::{Route, RouteKind, SiteRouter};
use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{About, Home, ProjectDetail, ProjectList};
use crate::state::catalog::provide_catalog;

const SITE_NAME: &str = "Folio";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    match Dataset::bundled() {
        Ok(dataset) => {
            provide_catalog(dataset);
            view! { <Site /> }.into_view()
        }
        Err(e) => {
            let message = format!("Failed to load projects: {}", e);
            web_sys::console::error_1(&message.clone().into());
            view! { <LoadError message=message /> }.into_view()
        }
    }
}

/// Page shell: header, routed content, footer
#[component]
fn Site() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <RouteView />
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Renders the view for the current path
#[component]
fn RouteView() -> impl IntoView {
    let router = SiteRouter::new();
    let location = use_location();

    let route = create_memo(move |_| router.resolve(&location.pathname.get()));

    // Changes only when a different page is needed, so moving between two
    // detail paths keeps the same ProjectDetail and just updates its id.
    let kind = create_memo(move |_| route.get().map(|r| r.kind()));
    let project_id = create_memo(move |_| {
        route
            .get()
            .and_then(|r| r.project_id().map(str::to_string))
            .unwrap_or_default()
    });

    create_effect(move |_| {
        let title = page_title(route.get().as_ref());
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&title);
        }
    });

    move || match kind.get() {
        Some(RouteKind::Home) => view! { <Home /> }.into_view(),
        Some(RouteKind::About) => view! { <About /> }.into_view(),
        Some(RouteKind::Projects) => view! { <ProjectList /> }.into_view(),
        Some(RouteKind::ProjectDetail) => view! { <ProjectDetail id=project_id /> }.into_view(),
        None => view! { <NotFound /> }.into_view(),
    }
}

/// Browser tab title for a route
fn page_title(route: Option<&Route>) -> String {
    match route.map(Route::kind) {
        Some(RouteKind::Home) => SITE_NAME.to_string(),
        Some(kind) => format!("{} | {}", kind.label(), SITE_NAME),
        None => format!("Page Not Found | {}", SITE_NAME),
    }
}

/// Site footer
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-4 px-4">
            <div class="container mx-auto text-sm text-gray-400 text-center">
                "Built with Rust and Leptos"
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Home"
            </A>
        </div>
    }
}

/// Shown instead of the site when the bundled dataset is malformed
#[component]
fn LoadError(message: String) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex items-center justify-center">
            <div class="bg-red-900/50 border border-red-700 rounded-xl p-8 max-w-lg">
                <h1 class="text-2xl font-bold mb-2">"Something went wrong"</h1>
                <p class="text-red-200 font-mono text-sm">{message}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_titles() {
        assert_eq!(page_title(Some(&Route::Home)), "Folio");
        assert_eq!(page_title(Some(&Route::Projects)), "Projects | Folio");
        assert_eq!(
            page_title(Some(&Route::ProjectDetail { id: "trex".to_string() })),
            "Project Detail | Folio"
        );
        assert_eq!(page_title(None), "Page Not Found | Folio");
    }
}
