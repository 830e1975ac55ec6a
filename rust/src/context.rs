use crate::error::{Error, Result};
use crate::partition;

/// Rank that gathers partial results and reports the estimate.
pub const COORDINATOR_RANK: usize = 0;

/// Samples tested across all participants when nothing else is configured.
pub const DEFAULT_TOTAL_BUDGET: u64 = 100_000_000;

/// Everything a participant needs to know about the run it takes part in.
///
/// Built once at participant start and passed by reference into the
/// partitioner, the sampler driver and the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    rank: usize,
    world_size: usize,
    total_budget: u64,
}

impl RunContext {
    pub fn new(rank: usize, world_size: usize, total_budget: u64) -> Result<Self> {
        if world_size == 0 {
            return Err(Error::EmptyWorld);
        }
        if rank >= world_size {
            return Err(Error::RankOutOfRange { rank, world_size });
        }
        Ok(RunContext {
            rank,
            world_size,
            total_budget,
        })
    }

    /// The single participant of a sequential run.
    pub fn sequential(total_budget: u64) -> Self {
        RunContext {
            rank: COORDINATOR_RANK,
            world_size: 1,
            total_budget,
        }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn world_size(&self) -> usize {
        self.world_size
    }

    pub fn total_budget(&self) -> u64 {
        self.total_budget
    }

    pub fn is_coordinator(&self) -> bool {
        self.rank == COORDINATOR_RANK
    }

    /// Number of samples this participant is responsible for.
    pub fn share(&self) -> u64 {
        // rank and world_size were validated on construction
        partition::share_unchecked(self.total_budget, self.rank, self.world_size)
    }
}
