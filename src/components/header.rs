//! Header Card
//!
//! Full-width greeting card with the live clock and date. Everything here is
//! derived from `state.now`, so it re-renders on every tick.

use leptos::*;

use crate::state::clock::{format_date, format_time, greeting};
use crate::state::global::DashboardState;

/// Greeting/time/date header spanning the full grid width
#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="card header-card">
            <h1 class="greeting">{move || format!("{}! 👋", greeting(&state.now.get()))}</h1>
            <div class="clock">{move || format_time(&state.now.get())}</div>
            <p class="date">{move || format_date(&state.now.get())}</p>
        </div>
    }
}
