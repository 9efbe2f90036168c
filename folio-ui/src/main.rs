//! Folio
//!
//! Personal portfolio front end built with Leptos (WASM).
//!
//! # Pages
//!
//! - Home and About
//! - Project list: a grid of cards, one per project
//! - Project detail: everything about one project
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The project dataset is compiled into the bundle; routing and
//! lookups come from the `folio` crate, this crate only renders.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
