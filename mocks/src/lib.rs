//! Mock implementations and test utilities for the assignment model
//!
//! This crate provides testing infrastructure including:
//! - A call-tracking mock of the `WorkItem` trait
//! - Builders and standard fixtures
//! - Custom assertion helpers
//! - Random data generators and property-based testing strategies
//! - Contract test helpers

pub mod assertions;
pub mod builders;
pub mod contracts;
pub mod fixtures;
pub mod generators;
pub mod task;

pub use assertions::*;
pub use builders::*;
pub use contracts::*;
pub use fixtures::*;
pub use generators::*;
pub use task::MockTask;
