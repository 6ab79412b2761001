//! Random test data generators using the fake crate
//!
//! Provides realistic random data including:
//! - Task titles and priorities
//! - User names
//! - Property-based testing strategies for assignment sequences

use assign_core::{Task, TaskRef};
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::FirstName;
use fake::Fake;
use proptest::prelude::*;
use rand::Rng;

/// Generate a realistic task title
pub fn generate_task_title() -> String {
    Sentence(2..6).fake()
}

/// Generate a priority label from a realistic pool
pub fn generate_priority() -> String {
    let priorities = ["Critical", "High", "Medium", "Low", "Someday"];
    priorities[rand::thread_rng().gen_range(0..priorities.len())].to_string()
}

/// Generate a user name
pub fn generate_user_name() -> String {
    FirstName().fake()
}

/// Generate a random pending task with realistic data
pub fn generate_random_task() -> TaskRef {
    Task::shared(generate_task_title(), generate_priority())
}

/// Configurable task generator
pub struct TaskGenerator {
    pub title_prefix: String,
    pub priority_pool: Vec<String>,
}

impl Default for TaskGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskGenerator {
    /// Create new generator with default settings
    pub fn new() -> Self {
        Self {
            title_prefix: "TASK".to_string(),
            priority_pool: vec![
                "High".to_string(),
                "Medium".to_string(),
                "Low".to_string(),
            ],
        }
    }

    /// Generate task with this generator's settings
    pub fn generate(&self) -> TaskRef {
        let number: u32 = (1..9999).fake();
        let priority =
            &self.priority_pool[rand::thread_rng().gen_range(0..self.priority_pool.len())];

        Task::shared(format!("{}-{number:03}", self.title_prefix), priority.clone())
    }

    /// Generate `count` distinct tasks
    pub fn generate_many(&self, count: usize) -> Vec<TaskRef> {
        (0..count).map(|_| self.generate()).collect()
    }
}

/// One step of a randomized assignment session, indexing into a task pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOp {
    Assign(usize),
    Complete(usize),
}

/// Proptest strategy for task titles
pub fn task_title_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,40}"
}

/// Proptest strategy for priority labels, including arbitrary free-form ones
pub fn priority_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("High".to_string()),
        Just("Medium".to_string()),
        Just("Low".to_string()),
        "[A-Za-z]{0,12}",
    ]
}

/// Proptest strategy for (title, priority) pairs used to build tasks
pub fn task_spec_strategy() -> impl Strategy<Value = (String, String)> {
    (task_title_strategy(), priority_strategy())
}

/// Proptest strategy for a single assignment step over a pool of `pool_size` tasks
pub fn assignment_op_strategy(pool_size: usize) -> impl Strategy<Value = AssignmentOp> {
    prop_oneof![
        (0..pool_size).prop_map(AssignmentOp::Assign),
        (0..pool_size).prop_map(AssignmentOp::Complete),
    ]
}

/// Proptest strategy for a sequence of assignment steps
pub fn assignment_ops_strategy(
    pool_size: usize,
    max_len: usize,
) -> impl Strategy<Value = Vec<AssignmentOp>> {
    prop::collection::vec(assignment_op_strategy(pool_size), 0..max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tasks_are_pending() {
        let task = generate_random_task();
        assert!(!task.title().is_empty());
        assert!(!task.is_completed());
    }

    #[test]
    fn test_task_generator_uses_pool() {
        let generator = TaskGenerator::new();
        for task in generator.generate_many(20) {
            assert!(task.title().starts_with("TASK-"));
            assert!(generator.priority_pool.iter().any(|p| p == task.priority()));
        }
    }
}
