//! Task Card
//!
//! To-do list with add (button or Enter key), per-task checkbox toggle, and
//! per-task delete. A whitespace-only add is a silent no-op.

use leptos::*;

use crate::state::global::{DashboardState, Task};

/// Task list card component
#[component]
pub fn TaskCard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let (draft, set_draft) = create_signal(String::new());

    // Clear the input only when a task was actually created; a rejected add
    // leaves the draft in place.
    let submit = move || {
        if state.add_task(&draft.get_untracked()) {
            set_draft.set(String::new());
        }
    };

    view! {
        <section class="card">
            <h3 class="card-title">"✅ Tasks"</h3>

            <div class="task-entry">
                <input
                    type="text"
                    placeholder="Add a new task..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                    class="task-input"
                />
                <button class="btn btn-add" on:click=move |_| submit()>"Add"</button>
            </div>

            <div class="card-scroll">
                {move || {
                    state.tasks.get()
                        .into_iter()
                        .map(|task| view! { <TaskRow task=task /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

/// A single task row: checkbox (the only toggle target), text, delete button
#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let id = task.id;

    view! {
        <div class="task-row" class:done=task.completed>
            <input
                type="checkbox"
                prop:checked=task.completed
                on:change=move |_| state.toggle_task(id)
            />
            <span class="task-text">{task.text}</span>
            <button class="btn btn-delete" on:click=move |_| state.delete_task(id)>
                "Delete"
            </button>
        </div>
    }
}
