use assign_core::{Task, User};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::ScenarioConfig;

/// Outcome of one assign-then-complete run
#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    /// Result of `assign_task`
    pub assigned: bool,
    /// Result of `complete_task`
    pub completed: bool,
    /// Completion flag of the task after the run
    pub task_completed: bool,
    /// The user and its tasks after the run
    pub user: User,
}

/// Create a user and a task, assign the task, then complete it.
pub fn run_scenario(config: &ScenarioConfig) -> ScenarioReport {
    let mut user = User::new(config.user.as_str());
    let task = Task::shared(config.title.as_str(), config.priority.as_str());

    let assigned = user.assign_task(&task);
    if !assigned {
        warn!(user = %user.name(), task = %task.title(), "Assignment was a no-op");
    }

    let completed = user.complete_task(&task);
    if !completed {
        warn!(user = %user.name(), task = %task.title(), "Completion was a no-op");
    }

    info!(
        user = %user.name(),
        task = %task.title(),
        status = %task.status(),
        "Scenario finished"
    );

    ScenarioReport {
        assigned,
        completed,
        task_completed: task.is_completed(),
        user,
    }
}
