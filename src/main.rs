//! Dayboard
//!
//! Personal dashboard built with Leptos (WASM): a live clock, simulated
//! weather, a task list, daily habits, and quick notes rendered as styled
//! cards in a single view.
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in memory for the lifetime of the tab; there
//! is no backend, no persistence, and no network I/O.

use leptos::*;

mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&"dayboard: mounting".into());

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
