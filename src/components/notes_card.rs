//! Notes Card
//!
//! Freeform notes; every input event overwrites the whole buffer.

use leptos::*;

use crate::state::global::DashboardState;

/// Quick notes card component
#[component]
pub fn NotesCard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <section class="card notes-card">
            <h3 class="card-title">"📝 Quick Notes"</h3>
            <textarea
                placeholder="Write your notes here..."
                prop:value=move || state.notes.get()
                on:input=move |ev| state.notes.set(event_target_value(&ev))
                class="notes-area"
            ></textarea>
        </section>
    }
}
