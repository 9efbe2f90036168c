//! Navigation Component
//!
//! Header navigation bar with brand and links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🦕"</span>
                        <span class="text-xl font-bold text-white">"Folio"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" exact=true />
                        <NavLink href="/about" label="About" />
                        <NavLink href="/projects" label="Projects" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
///
/// Non-exact links stay highlighted on nested paths, so "Projects" is
/// active on `/projects/trex` too.
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
    #[prop(optional)]
    exact: bool,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=exact
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
