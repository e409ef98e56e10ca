//! Dashboard State
//!
//! Reactive state management using Leptos signals. All five state slices
//! (clock, weather, tasks, habits, notes) are owned by a single
//! `DashboardState` provided through context; nothing outside this tree
//! reads or writes them, and nothing survives the tab.

use chrono::{DateTime, Local};
use leptos::*;

/// A single to-do item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    /// Stored exactly as typed; only the emptiness check trims
    pub text: String,
    pub completed: bool,
}

/// A daily habit. The set is fixed at startup; only the flag changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Habit {
    pub id: u64,
    pub name: String,
    pub completed: bool,
}

/// Weather condition labels shown on the weather card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    Windy,
}

impl Condition {
    /// The fixed set a refresh samples from
    pub const ALL: [Condition; 4] = [
        Condition::Sunny,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Windy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Windy => "Windy",
        }
    }
}

/// Simulated weather readout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weather {
    pub temp: i32,
    pub condition: Condition,
}

impl Default for Weather {
    fn default() -> Self {
        Self {
            temp: 22,
            condition: Condition::Sunny,
        }
    }
}

impl Weather {
    /// Map two uniform samples from [0, 1) to a fresh readout: temperature
    /// in [10, 39] and an independently picked condition. The clamps keep
    /// a sample of exactly 1.0 in range.
    pub fn sample(u_temp: f64, u_cond: f64) -> Self {
        let temp = 10 + (u_temp * 30.0) as i32;
        let idx = (u_cond * Condition::ALL.len() as f64) as usize;
        Self {
            temp: temp.min(39),
            condition: Condition::ALL[idx.min(Condition::ALL.len() - 1)],
        }
    }
}

/// Completion counts derived from the current task and habit lists
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub completed_habits: usize,
    pub total_habits: usize,
}

impl Progress {
    pub fn tasks_fraction(&self) -> String {
        format!("{}/{}", self.completed_tasks, self.total_tasks)
    }

    pub fn habits_fraction(&self) -> String {
        format!("{}/{}", self.completed_habits, self.total_habits)
    }

    /// Everything across both lists is complete. Holds vacuously when both
    /// lists are empty (0 == 0); the summary card relies on that boundary.
    pub fn is_perfect_day(&self) -> bool {
        self.completed_tasks + self.completed_habits == self.total_tasks + self.total_habits
    }
}

/// Global dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Current wall-clock time, replaced once per second by the clock driver
    pub now: RwSignal<DateTime<Local>>,
    /// Simulated weather readout, replaced wholesale on refresh
    pub weather: RwSignal<Weather>,
    /// To-do list in insertion order
    pub tasks: RwSignal<Vec<Task>>,
    /// Fixed habit set, toggle only
    pub habits: RwSignal<Vec<Habit>>,
    /// Freeform notes buffer
    pub notes: RwSignal<String>,
    /// Monotonic id source for new tasks
    next_task_id: RwSignal<u64>,
}

const WELCOME_NOTE: &str =
    "Welcome to your personal dashboard!\n\nUse this space for quick notes and reminders.";

fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            text: "Check emails".to_string(),
            completed: false,
        },
        Task {
            id: 2,
            text: "Team meeting at 2 PM".to_string(),
            completed: false,
        },
        Task {
            id: 3,
            text: "Review project proposal".to_string(),
            completed: true,
        },
    ]
}

fn seed_habits() -> Vec<Habit> {
    vec![
        Habit {
            id: 1,
            name: "Drink 8 glasses of water".to_string(),
            completed: false,
        },
        Habit {
            id: 2,
            name: "Exercise for 30 minutes".to_string(),
            completed: true,
        },
        Habit {
            id: 3,
            name: "Read for 20 minutes".to_string(),
            completed: false,
        },
        Habit {
            id: 4,
            name: "Meditate for 10 minutes".to_string(),
            completed: false,
        },
    ]
}

impl DashboardState {
    pub fn new() -> Self {
        let tasks = seed_tasks();
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;

        Self {
            now: create_rw_signal(Local::now()),
            weather: create_rw_signal(Weather::default()),
            tasks: create_rw_signal(tasks),
            habits: create_rw_signal(seed_habits()),
            notes: create_rw_signal(WELCOME_NOTE.to_string()),
            next_task_id: create_rw_signal(next_id),
        }
    }

    /// Append a task with the given text. Whitespace-only text is rejected
    /// silently; the raw text is stored as typed. Returns whether a task was
    /// created, so the caller knows whether to clear its input buffer.
    pub fn add_task(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        let id = self.next_task_id.get_untracked();
        self.next_task_id.set(id + 1);

        self.tasks.update(|tasks| {
            tasks.push(Task {
                id,
                text: text.to_string(),
                completed: false,
            });
        });
        true
    }

    /// Flip a task's completed flag in place. Unknown ids are ignored.
    pub fn toggle_task(&self, id: u64) {
        self.tasks.update(|tasks| {
            if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
                task.completed = !task.completed;
            }
        });
    }

    /// Remove a task, keeping the relative order of the rest. Unknown ids
    /// are ignored.
    pub fn delete_task(&self, id: u64) {
        self.tasks.update(|tasks| tasks.retain(|t| t.id != id));
    }

    /// Flip a habit's completed flag in place. Unknown ids are ignored.
    pub fn toggle_habit(&self, id: u64) {
        self.habits.update(|habits| {
            if let Some(habit) = habits.iter_mut().find(|h| h.id == id) {
                habit.completed = !habit.completed;
            }
        });
    }

    /// Completion counts for the progress card, derived from current lists
    pub fn progress(&self) -> Progress {
        let tasks = self.tasks.get();
        let habits = self.habits.get();

        Progress {
            completed_tasks: tasks.iter().filter(|t| t.completed).count(),
            total_tasks: tasks.len(),
            completed_habits: habits.iter().filter(|h| h.completed).count(),
            total_habits: habits.len(),
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() {
    provide_context(DashboardState::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_runtime(f: impl FnOnce()) {
        let runtime = create_runtime();
        f();
        runtime.dispose();
    }

    #[test]
    fn add_task_appends_incomplete() {
        in_runtime(|| {
            let state = DashboardState::new();
            assert!(state.add_task("Buy milk"));

            let tasks = state.tasks.get_untracked();
            assert_eq!(tasks.len(), 4);

            let last = tasks.last().unwrap();
            assert_eq!(last.text, "Buy milk");
            assert!(!last.completed);
        });
    }

    #[test]
    fn add_task_stores_raw_text() {
        in_runtime(|| {
            let state = DashboardState::new();
            assert!(state.add_task("  Buy milk  "));
            assert_eq!(state.tasks.get_untracked().last().unwrap().text, "  Buy milk  ");
        });
    }

    #[test]
    fn add_task_rejects_whitespace_only() {
        in_runtime(|| {
            let state = DashboardState::new();
            assert!(!state.add_task(""));
            assert!(!state.add_task("   \t\n"));
            assert_eq!(state.tasks.get_untracked().len(), 3);
        });
    }

    #[test]
    fn task_ids_stay_unique_across_rapid_adds() {
        in_runtime(|| {
            let state = DashboardState::new();
            for i in 0..5 {
                state.add_task(&format!("task {}", i));
            }

            let ids: Vec<u64> = state.tasks.get_untracked().iter().map(|t| t.id).collect();
            let mut deduped = ids.clone();
            deduped.dedup();
            assert_eq!(ids, deduped);
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
        });
    }

    #[test]
    fn toggling_a_task_twice_round_trips() {
        in_runtime(|| {
            let state = DashboardState::new();
            let before = state.tasks.get_untracked()[0].completed;

            state.toggle_task(1);
            assert_eq!(state.tasks.get_untracked()[0].completed, !before);

            state.toggle_task(1);
            assert_eq!(state.tasks.get_untracked()[0].completed, before);
        });
    }

    #[test]
    fn unknown_ids_are_noops() {
        in_runtime(|| {
            let state = DashboardState::new();
            state.toggle_task(99);
            state.delete_task(99);
            state.toggle_habit(99);

            assert_eq!(state.tasks.get_untracked(), seed_tasks());
            assert_eq!(state.habits.get_untracked(), seed_habits());
        });
    }

    #[test]
    fn delete_preserves_relative_order() {
        in_runtime(|| {
            let state = DashboardState::new();
            state.delete_task(2);

            let ids: Vec<u64> = state.tasks.get_untracked().iter().map(|t| t.id).collect();
            assert_eq!(ids, vec![1, 3]);
        });
    }

    #[test]
    fn seed_progress_reads_one_of_three_and_one_of_four() {
        in_runtime(|| {
            let state = DashboardState::new();
            let progress = state.progress();

            assert_eq!(progress.tasks_fraction(), "1/3");
            assert_eq!(progress.habits_fraction(), "1/4");
            assert!(!progress.is_perfect_day());
        });
    }

    #[test]
    fn untoggling_the_completed_seed_task_zeroes_the_count() {
        in_runtime(|| {
            let state = DashboardState::new();
            state.toggle_task(3);

            assert!(!state.tasks.get_untracked()[2].completed);
            assert_eq!(state.progress().completed_tasks, 0);
        });
    }

    #[test]
    fn perfect_day_requires_everything_complete() {
        in_runtime(|| {
            let state = DashboardState::new();
            state.toggle_task(1);
            state.toggle_task(2);
            state.toggle_habit(1);
            state.toggle_habit(3);
            state.toggle_habit(4);
            assert!(state.progress().is_perfect_day());

            state.toggle_habit(4);
            assert!(!state.progress().is_perfect_day());
        });
    }

    #[test]
    fn perfect_day_holds_vacuously_with_no_items() {
        let progress = Progress {
            completed_tasks: 0,
            total_tasks: 0,
            completed_habits: 0,
            total_habits: 0,
        };
        assert!(progress.is_perfect_day());
    }

    #[test]
    fn weather_sample_stays_in_bounds() {
        for i in 0..=10 {
            for j in 0..=10 {
                let w = Weather::sample(f64::from(i) / 10.0, f64::from(j) / 10.0);
                assert!((10..=39).contains(&w.temp), "temp {} out of range", w.temp);
                assert!(Condition::ALL.contains(&w.condition));
            }
        }
    }

    #[test]
    fn weather_sample_covers_the_extremes() {
        assert_eq!(Weather::sample(0.0, 0.0).temp, 10);
        assert_eq!(Weather::sample(0.999_999, 0.0).temp, 39);
        assert_eq!(Weather::sample(0.0, 0.0).condition, Condition::Sunny);
        assert_eq!(Weather::sample(0.0, 0.999_999).condition, Condition::Windy);
    }

    #[test]
    fn weather_default_matches_the_seed_readout() {
        let w = Weather::default();
        assert_eq!(w.temp, 22);
        assert_eq!(w.condition, Condition::Sunny);
    }
}
