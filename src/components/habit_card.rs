//! Habit Card
//!
//! Fixed daily habit list. The whole row is the click target, a broader
//! contract than the task list's checkbox-only toggle.

use leptos::*;

use crate::state::global::{DashboardState, Habit};

/// Daily habits card component
#[component]
pub fn HabitCard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <section class="card">
            <h3 class="card-title">"🎯 Daily Habits"</h3>
            <div class="card-scroll">
                {move || {
                    state.habits.get()
                        .into_iter()
                        .map(|habit| view! { <HabitRow habit=habit /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

/// A single habit row; clicking anywhere on it toggles completion
#[component]
fn HabitRow(habit: Habit) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let id = habit.id;

    view! {
        <div
            class="habit-row"
            class:done=habit.completed
            on:click=move |_| state.toggle_habit(id)
        >
            <div class="habit-check">{if habit.completed { "✓" } else { "" }}</div>
            <span class="habit-name">{habit.name}</span>
        </div>
    }
}
