//! Monte Carlo estimation of π split across cooperating participants.
//!
//! A fixed sample budget is partitioned over the ranks of a group, every rank
//! samples its share independently, and the coordinator (rank 0) gathers the
//! hit counts to derive the estimate.

pub mod context;
pub mod coordinator;
pub mod error;
pub mod monte_carlo;
pub mod partition;
pub mod reducer;
pub mod report;

pub use context::{RunContext, COORDINATOR_RANK, DEFAULT_TOTAL_BUDGET};
pub use coordinator::{
    coordinator_report, estimate, finish_participant, reduce_and_estimate, run_participant,
    run_sequential, run_threads, sample_share,
};
pub use error::{Error, Result};
pub use reducer::{assemble, GroupMember, Reducer, Solo, ThreadGroup};
pub use report::{Report, Stopwatch};
