//! Assignment Core Library
//!
//! In-memory task assignment model: a [`User`] is assigned [`Task`]s and
//! completes them. Invalid requests (assigning a task twice, completing a
//! task that is not assigned or already done) are no-ops reported through
//! boolean results, or through [`AssignmentError`] with the `try_*` variants.
//!
//! # Architecture
//!
//! - [`models`] - `Task`, `TaskStatus` and the `WorkItem` trait
//! - [`user`] - `User` and its assignment/completion rules
//! - [`error`] - Error types and result handling
//!
//! # Example
//!
//! ```rust
//! use assign_core::{Task, User};
//!
//! let mut user = User::new("Alice");
//! let task = Task::shared("Complete project", "High");
//!
//! assert!(user.assign_task(&task));
//! assert!(user.complete_task(&task));
//! assert!(task.is_completed());
//! ```

pub mod error;
pub mod models;
pub mod user;

// Re-export commonly used types at the crate root for convenience
pub use error::{AssignmentError, Result};
pub use models::{Task, TaskRef, TaskStatus, WorkItem};
pub use user::User;

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
