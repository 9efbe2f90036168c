//! About Page

use leptos::*;

/// Short bio and toolbox
#[component]
pub fn About() -> impl IntoView {
    let skills = ["HTML & CSS", "JavaScript", "React", "Node.js", "MongoDB", "Rust"];

    view! {
        <div class="max-w-3xl mx-auto space-y-8">
            <section>
                <h1 class="text-3xl font-bold">"About"</h1>
                <p class="text-gray-300 mt-4 leading-relaxed">
                    "I started with static pages and a lot of curiosity, moved on to "
                    "browser games and full-stack apps, and now enjoy building fast, "
                    "dependable front ends."
                </p>
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Toolbox"</h2>
                <ul class="flex flex-wrap gap-2">
                    {skills
                        .into_iter()
                        .map(|skill| view! {
                            <li class="bg-gray-700 rounded-full px-3 py-1 text-sm">{skill}</li>
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
