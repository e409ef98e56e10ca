//! Weather Card
//!
//! Simulated weather readout. "Refresh" resamples the readout from
//! `Math.random()` instead of calling a real feed.

use leptos::*;

use crate::state::global::{DashboardState, Weather};

/// Weather card component
#[component]
pub fn WeatherCard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let refresh = move |_| {
        state
            .weather
            .set(Weather::sample(js_sys::Math::random(), js_sys::Math::random()));
    };

    view! {
        <section class="card">
            <h3 class="card-title">"🌤️ Weather"</h3>
            <div class="weather-body">
                <div class="weather-temp">{move || format!("{}°C", state.weather.get().temp)}</div>
                <p class="weather-condition">{move || state.weather.get().condition.label()}</p>
                <button class="btn btn-primary" on:click=refresh>"Refresh"</button>
            </div>
        </section>
    }
}
