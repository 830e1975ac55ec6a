//! Tokio-driven process group for the Monte Carlo π estimator.

pub mod group;
pub mod monte_carlo;

pub use group::{TaskGroup, TaskMember};
pub use monte_carlo::run_tasks;
