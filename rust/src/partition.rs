//! Splitting a fixed sample budget across the participants of a run.
//!
//! Every participant receives `total / world_size` samples and the first
//! `total % world_size` ranks receive one more, so the shares always add up
//! to the budget exactly.

use crate::error::{Error, Result};

pub fn share(total: u64, rank: usize, world_size: usize) -> Result<u64> {
    if world_size == 0 {
        return Err(Error::EmptyWorld);
    }
    if rank >= world_size {
        return Err(Error::RankOutOfRange { rank, world_size });
    }
    Ok(share_unchecked(total, rank, world_size))
}

/// Shares of every rank, in rank order.
pub fn shares(total: u64, world_size: usize) -> Result<Vec<u64>> {
    if world_size == 0 {
        return Err(Error::EmptyWorld);
    }
    Ok((0..world_size)
        .map(|rank| share_unchecked(total, rank, world_size))
        .collect())
}

pub(crate) fn share_unchecked(total: u64, rank: usize, world_size: usize) -> u64 {
    let world_size = world_size as u64;
    let base = total / world_size;
    let remainder = total % world_size;
    if (rank as u64) < remainder {
        base + 1
    } else {
        base
    }
}
