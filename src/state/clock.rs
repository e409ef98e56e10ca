//! Clock Driver
//!
//! Owns the 1-second interval that keeps `DashboardState::now` current, plus
//! the pure greeting/time/date formatting derived from it.

use chrono::{DateTime, Local, Timelike};
use gloo_timers::callback::Interval;
use leptos::*;

use super::global::DashboardState;

/// Start the repeating 1000ms clock tick (call from the app root). The
/// interval handle is moved into `on_cleanup`, so tearing down the owning
/// scope drops it and cancels the underlying timer.
pub fn init_clock(state: DashboardState) {
    let interval = Interval::new(1_000, move || state.now.set(Local::now()));
    on_cleanup(move || drop(interval));
}

/// Greeting for the header card, switching at noon and at 6 PM
pub fn greeting(now: &DateTime<Local>) -> &'static str {
    match now.hour() {
        0..=11 => "Good Morning",
        12..=17 => "Good Afternoon",
        _ => "Good Evening",
    }
}

/// 12-hour clock with seconds and AM/PM, e.g. "08:05:09 PM"
pub fn format_time(now: &DateTime<Local>) -> String {
    now.format("%I:%M:%S %p").to_string()
}

/// Long-form date, e.g. "Saturday, August 23, 2025"
pub fn format_date(now: &DateTime<Local>) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(hour: u32, min: u32, sec: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 8, 23, hour, min, sec).unwrap()
    }

    #[test]
    fn greeting_switches_at_noon_and_six() {
        assert_eq!(greeting(&local(5, 0, 0)), "Good Morning");
        assert_eq!(greeting(&local(11, 59, 59)), "Good Morning");
        assert_eq!(greeting(&local(12, 0, 0)), "Good Afternoon");
        assert_eq!(greeting(&local(17, 59, 59)), "Good Afternoon");
        assert_eq!(greeting(&local(18, 0, 0)), "Good Evening");
        assert_eq!(greeting(&local(23, 59, 59)), "Good Evening");
    }

    #[test]
    fn time_renders_two_digit_twelve_hour() {
        assert_eq!(format_time(&local(20, 5, 9)), "08:05:09 PM");
        assert_eq!(format_time(&local(12, 30, 0)), "12:30:00 PM");
    }

    #[test]
    fn date_renders_long_form() {
        assert_eq!(format_date(&local(9, 0, 0)), "Saturday, August 23, 2025");
    }
}
