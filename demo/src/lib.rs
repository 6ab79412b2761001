//! Assignment demo library
//!
//! Configuration, telemetry and the reference assign-then-complete scenario
//! behind the `assign-demo` binary.

pub mod config;
pub mod scenario;
pub mod telemetry;

pub use config::Config;
pub use scenario::{run_scenario, ScenarioReport};
pub use telemetry::init_telemetry;
