//! Error types for mc_pi

use thiserror::Error;

/// Result type for every fallible operation in the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A process group needs at least one participant
    #[error("world size must be at least 1")]
    EmptyWorld,

    #[error("rank {rank} is outside a world of size {world_size}")]
    RankOutOfRange { rank: usize, world_size: usize },

    /// The estimate divides by the total budget
    #[error("total budget is zero, the estimate is undefined")]
    ZeroBudget,

    #[error("{hits} hits reported for a budget of {total} samples")]
    HitsExceedBudget { hits: u64, total: u64 },

    /// The coordinator received fewer (or more) partials than participants
    #[error("gathered {got} partial results, expected {expected}")]
    IncompleteGather { expected: usize, got: usize },

    #[error("rank {0} contributed more than once")]
    DuplicateContribution(usize),

    /// A group member went away before the gather completed
    #[error("process group disconnected before the gather completed")]
    Disconnected,

    #[error("participant {0} panicked")]
    ParticipantPanicked(usize),

    #[error("hit count sum overflowed")]
    Overflow,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
