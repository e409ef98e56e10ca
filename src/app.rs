//! App Root Component
//!
//! Mounts the card grid and owns the global state and the clock lifecycle.

use leptos::*;

use crate::components::{HabitCard, Header, NotesCard, ProgressCard, TaskCard, WeatherCard};
use crate::state::clock::init_clock;
use crate::state::global::{provide_dashboard_state, DashboardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide dashboard state to all components
    provide_dashboard_state();

    // Start the 1-second clock; cancelled when this scope is cleaned up
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    init_clock(state);

    view! {
        <div class="page">
            <div class="board">
                <Header />
                <WeatherCard />
                <ProgressCard />
                <TaskCard />
                <HabitCard />
                <NotesCard />
            </div>
        </div>
    }
}
