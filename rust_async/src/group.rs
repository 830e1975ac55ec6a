//! Async counterpart of the thread group: participants are tokio tasks and
//! the gather waits on a tokio barrier instead of blocking a thread.

use std::sync::Arc;

use mc_pi::{assemble, Error, Result, COORDINATOR_RANK};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::Barrier;

pub struct TaskGroup;

impl TaskGroup {
    pub fn new(world_size: usize) -> Result<Vec<TaskMember>> {
        if world_size == 0 {
            return Err(Error::EmptyWorld);
        }
        let (tx, rx) = mpsc::unbounded_channel();
        let barrier = Arc::new(Barrier::new(world_size));
        let mut rx = Some(rx);

        Ok((0..world_size)
            .map(|rank| TaskMember {
                rank,
                world_size,
                tx: tx.clone(),
                rx: if rank == COORDINATOR_RANK { rx.take() } else { None },
                barrier: Arc::clone(&barrier),
            })
            .collect())
    }
}

pub struct TaskMember {
    rank: usize,
    world_size: usize,
    tx: UnboundedSender<(usize, u64)>,
    rx: Option<UnboundedReceiver<(usize, u64)>>,
    barrier: Arc<Barrier>,
}

impl TaskMember {
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn world_size(&self) -> usize {
        self.world_size
    }

    /// Resolves once every member has contributed. The coordinator gets all
    /// values ordered by rank, the rest get `None`.
    pub async fn contribute(&mut self, value: u64) -> Result<Option<Vec<u64>>> {
        self.tx
            .send((self.rank, value))
            .map_err(|_| Error::Disconnected)?;
        self.barrier.wait().await;

        let world_size = self.world_size;
        match self.rx.as_mut() {
            Some(rx) => {
                let drained = std::iter::from_fn(|| rx.try_recv().ok()).take(world_size);
                assemble(world_size, drained).map(Some)
            }
            None => Ok(None),
        }
    }
}
