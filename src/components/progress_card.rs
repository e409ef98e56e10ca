//! Progress Card
//!
//! Completion summary over tasks and habits, with the perfect-day state.

use leptos::*;

use crate::state::global::DashboardState;

/// Today's progress summary card
#[component]
pub fn ProgressCard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let progress = create_memo(move |_| state.progress());

    view! {
        <section class="card">
            <h3 class="card-title">"📊 Today's Progress"</h3>
            <div class="progress-body">
                <div class="progress-row">
                    <span>"Tasks Complete:"</span>
                    <span class="badge badge-green">{move || progress.get().tasks_fraction()}</span>
                </div>
                <div class="progress-row">
                    <span>"Habits Done:"</span>
                    <span class="badge badge-blue">{move || progress.get().habits_fraction()}</span>
                </div>
                <div class="mood-box">
                    {move || {
                        if progress.get().is_perfect_day() {
                            view! {
                                <div class="mood-emoji">"🎉"</div>
                                <p class="mood-text">"Perfect Day!"</p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="mood-emoji">"💪"</div>
                                <p class="mood-text">"Keep Going!"</p>
                            }.into_view()
                        }
                    }}
                </div>
            </div>
        </section>
    }
}
