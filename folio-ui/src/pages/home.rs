//! Home Page

use leptos::*;
use leptos_router::*;

/// Landing page
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class="flex flex-col items-center justify-center min-h-[60vh] text-center space-y-6">
            <h1 class="text-5xl font-bold">"Hi, I'm a web developer."</h1>
            <p class="text-xl text-gray-400 max-w-2xl">
                "I build landing pages, games and single-page apps. "
                "This site collects the projects I'm proudest of."
            </p>
            <div class="flex space-x-4">
                <A
                    href="/projects"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "See my projects"
                </A>
                <A
                    href="/about"
                    class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    "About me"
                </A>
            </div>
        </section>
    }
}
