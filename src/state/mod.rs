//! State Management
//!
//! Dashboard state signals and the clock driver.

pub mod clock;
pub mod global;

pub use clock::init_clock;
pub use global::{provide_dashboard_state, Condition, DashboardState, Habit, Progress, Task, Weather};
