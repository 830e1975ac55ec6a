use mc_pi::monte_carlo::participant_rng;
use mc_pi::{finish_participant, sample_share, Error, Report, Result, RunContext, Stopwatch};
use tokio::task;

use crate::group::{TaskGroup, TaskMember};

async fn run_member(mut member: TaskMember, total: u64, seed: Option<u64>) -> Result<Option<Report>> {
    let ctx = RunContext::new(member.rank(), member.world_size(), total)?;
    let rank = ctx.rank();
    let watch = Stopwatch::start();

    // sampling is CPU bound, keep it off the async workers
    let hits = task::spawn_blocking(move || sample_share(&ctx, &mut participant_rng(seed, rank)))
        .await
        .map_err(|_| Error::ParticipantPanicked(rank))?;

    let gathered = member.contribute(hits).await?;
    finish_participant(&ctx, &watch, gathered)
}

/// Runs `num_tasks` participants as tokio tasks and returns the
/// coordinator's report.
pub async fn run_tasks(total: u64, num_tasks: usize, seed: Option<u64>) -> Result<Report> {
    let members = TaskGroup::new(num_tasks)?;

    let mut handles = vec![];
    for member in members {
        handles.push(tokio::spawn(run_member(member, total, seed)));
    }

    let mut report = None;
    for (rank, handle) in handles.into_iter().enumerate() {
        let outcome = handle.await.map_err(|_| Error::ParticipantPanicked(rank))??;
        if outcome.is_some() {
            report = outcome;
        }
    }

    report.ok_or(Error::IncompleteGather {
        expected: num_tasks,
        got: 0,
    })
}
