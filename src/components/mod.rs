//! UI Components
//!
//! The dashboard cards, one per feature area.

pub mod habit_card;
pub mod header;
pub mod notes_card;
pub mod progress_card;
pub mod task_card;
pub mod weather_card;

pub use habit_card::HabitCard;
pub use header::Header;
pub use notes_card::NotesCard;
pub use progress_card::ProgressCard;
pub use task_card::TaskCard;
pub use weather_card::WeatherCard;
