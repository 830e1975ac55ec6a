//! The collective gather a run ends with.
//!
//! Participants hand their hit count to a [`Reducer`]. The coordinator gets
//! every participant's value back, ordered by rank, and only once all of them
//! have contributed. Everyone else gets `None`.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Barrier};

use crate::context::COORDINATOR_RANK;
use crate::error::{Error, Result};

pub trait Reducer {
    fn rank(&self) -> usize;

    fn world_size(&self) -> usize;

    /// Blocks until every participant of the group has contributed.
    fn contribute(&mut self, value: u64) -> Result<Option<Vec<u64>>>;
}

/// Gather over a world of one participant.
#[derive(Debug, Default, Clone, Copy)]
pub struct Solo;

impl Reducer for Solo {
    fn rank(&self) -> usize {
        COORDINATOR_RANK
    }

    fn world_size(&self) -> usize {
        1
    }

    fn contribute(&mut self, value: u64) -> Result<Option<Vec<u64>>> {
        Ok(Some(vec![value]))
    }
}

/// Orders `(rank, value)` contributions by rank. Every rank in the world
/// must appear exactly once.
pub fn assemble<I>(world_size: usize, contributions: I) -> Result<Vec<u64>>
where
    I: IntoIterator<Item = (usize, u64)>,
{
    let mut slots = vec![None; world_size];
    let mut got = 0;
    for (rank, value) in contributions {
        let slot = slots
            .get_mut(rank)
            .ok_or(Error::RankOutOfRange { rank, world_size })?;
        if slot.replace(value).is_some() {
            return Err(Error::DuplicateContribution(rank));
        }
        got += 1;
    }
    if got != world_size {
        return Err(Error::IncompleteGather {
            expected: world_size,
            got,
        });
    }
    Ok(slots.into_iter().flatten().collect())
}

/// In-process group where each participant runs on its own thread.
pub struct ThreadGroup;

impl ThreadGroup {
    /// Creates one member per rank. Each member is meant to be moved onto
    /// the thread running that participant.
    pub fn new(world_size: usize) -> Result<Vec<GroupMember>> {
        if world_size == 0 {
            return Err(Error::EmptyWorld);
        }
        let (tx, rx) = mpsc::channel();
        let barrier = Arc::new(Barrier::new(world_size));
        let mut rx = Some(rx);

        Ok((0..world_size)
            .map(|rank| GroupMember {
                rank,
                world_size,
                tx: tx.clone(),
                rx: if rank == COORDINATOR_RANK { rx.take() } else { None },
                barrier: Arc::clone(&barrier),
            })
            .collect())
    }
}

pub struct GroupMember {
    rank: usize,
    world_size: usize,
    tx: Sender<(usize, u64)>,
    rx: Option<Receiver<(usize, u64)>>,
    barrier: Arc<Barrier>,
}

impl Reducer for GroupMember {
    fn rank(&self) -> usize {
        self.rank
    }

    fn world_size(&self) -> usize {
        self.world_size
    }

    fn contribute(&mut self, value: u64) -> Result<Option<Vec<u64>>> {
        self.tx
            .send((self.rank, value))
            .map_err(|_| Error::Disconnected)?;
        // every send happens-before the coordinator drains the channel
        self.barrier.wait();

        match &self.rx {
            Some(rx) => assemble(self.world_size, rx.try_iter().take(self.world_size)).map(Some),
            None => Ok(None),
        }
    }
}
