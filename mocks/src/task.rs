//! Mock implementation of the WorkItem trait
//!
//! Provides a task double with:
//! - Call tracking for verification
//! - A scriptable completion flag

use std::rc::Rc;

use assign_core::WorkItem;
use parking_lot::Mutex;

/// Mock implementation of WorkItem for testing how a `User` drives tasks
///
/// By default it behaves like a real task: `complete()` sets the flag.
/// [`MockTask::set_completed`] overrides the flag directly, so tests can put
/// the task in a completed state without going through `complete()`.
pub struct MockTask {
    title: String,
    priority: String,
    completed: Mutex<bool>,
    call_history: Mutex<Vec<String>>,
}

impl Default for MockTask {
    fn default() -> Self {
        Self::new("Mock task", "Medium")
    }
}

impl MockTask {
    /// Create a pending mock task
    pub fn new(title: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: priority.into(),
            completed: Mutex::new(false),
            call_history: Mutex::new(Vec::new()),
        }
    }

    /// Create a pending mock task behind a shared handle
    pub fn shared(title: impl Into<String>, priority: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::new(title, priority))
    }

    /// Force the value reported by `is_completed()` without recording a call
    pub fn set_completed(&self, completed: bool) {
        *self.completed.lock() = completed;
    }

    /// Get history of called methods
    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().clone()
    }

    /// Clear call history
    pub fn clear_history(&self) {
        self.call_history.lock().clear();
    }

    /// Number of times `method` was called
    pub fn call_count(&self, method: &str) -> usize {
        self.call_history
            .lock()
            .iter()
            .filter(|call| call.as_str() == method)
            .count()
    }

    /// Number of `complete()` calls
    pub fn complete_calls(&self) -> usize {
        self.call_count("complete")
    }

    /// Assert method was called
    pub fn assert_called(&self, method: &str) {
        let history = self.call_history.lock();
        assert!(
            history.iter().any(|call| call == method),
            "Method '{}' was not called on '{}'. Call history: {:?}",
            method,
            self.title,
            *history
        );
    }

    /// Assert method was never called
    pub fn assert_not_called(&self, method: &str) {
        let history = self.call_history.lock();
        assert!(
            !history.iter().any(|call| call == method),
            "Method '{}' was called on '{}'. Call history: {:?}",
            method,
            self.title,
            *history
        );
    }

    /// Record method call in history
    fn record_call(&self, method: &str) {
        self.call_history.lock().push(method.to_string());
    }
}

impl WorkItem for MockTask {
    fn title(&self) -> &str {
        &self.title
    }

    fn priority(&self) -> &str {
        &self.priority
    }

    fn is_completed(&self) -> bool {
        self.record_call("is_completed");
        *self.completed.lock()
    }

    fn complete(&self) {
        self.record_call("complete");
        *self.completed.lock() = true;
    }
}

impl std::fmt::Debug for MockTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTask")
            .field("title", &self.title)
            .field("priority", &self.priority)
            .field("completed", &*self.completed.lock())
            .field("calls", &self.call_history.lock().len())
            .finish()
    }
}
