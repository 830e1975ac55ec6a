//! Driving a participant through a run and deriving the estimate.

use std::thread;

use rand::Rng;
use tracing::{debug, info};

use crate::context::RunContext;
use crate::error::{Error, Result};
use crate::monte_carlo::{participant_rng, sample};
use crate::partition;
use crate::reducer::{Reducer, Solo, ThreadGroup};
use crate::report::{Report, Stopwatch};

/// π̂ = 4 × hits / total.
pub fn estimate(hits: u64, total: u64) -> Result<f64> {
    if total == 0 {
        return Err(Error::ZeroBudget);
    }
    if hits > total {
        return Err(Error::HitsExceedBudget { hits, total });
    }
    Ok(4.0 * hits as f64 / total as f64)
}

/// Sums one hit count per participant and derives the estimate. Order of
/// `partials` does not matter but every participant must be present.
pub fn reduce_and_estimate(ctx: &RunContext, partials: &[u64]) -> Result<f64> {
    if partials.len() != ctx.world_size() {
        return Err(Error::IncompleteGather {
            expected: ctx.world_size(),
            got: partials.len(),
        });
    }
    let hits = sum_hits(partials)?;
    estimate(hits, ctx.total_budget())
}

fn sum_hits(partials: &[u64]) -> Result<u64> {
    partials
        .iter()
        .try_fold(0u64, |acc, &h| acc.checked_add(h))
        .ok_or(Error::Overflow)
}

/// Runs one participant: sample its share, contribute the hits, and on the
/// coordinator turn the gathered hits into a [`Report`]. Workers get `None`.
pub fn run_participant<R, G>(ctx: &RunContext, reducer: &mut R, rng: &mut G) -> Result<Option<Report>>
where
    R: Reducer + ?Sized,
    G: Rng + ?Sized,
{
    debug_assert_eq!(reducer.rank(), ctx.rank());
    debug_assert_eq!(reducer.world_size(), ctx.world_size());

    let watch = Stopwatch::start();
    let hits = sample_share(ctx, rng);
    let gathered = reducer.contribute(hits)?;
    finish_participant(ctx, &watch, gathered)
}

/// Samples this participant's share of the budget and returns its hits.
pub fn sample_share<G: Rng + ?Sized>(ctx: &RunContext, rng: &mut G) -> u64 {
    let share = ctx.share();
    let hits = sample(rng, share);
    debug!(rank = ctx.rank(), share, hits, "sampling done");
    hits
}

/// What a participant does once its contribution returns: workers are done,
/// the coordinator turns the gathered hits into a [`Report`].
pub fn finish_participant(
    ctx: &RunContext,
    watch: &Stopwatch,
    gathered: Option<Vec<u64>>,
) -> Result<Option<Report>> {
    if !ctx.is_coordinator() {
        return Ok(None);
    }
    let partials = gathered.ok_or(Error::IncompleteGather {
        expected: ctx.world_size(),
        got: 0,
    })?;
    coordinator_report(ctx, watch, &partials).map(Some)
}

/// Turns the gathered partials into the coordinator's [`Report`], stopping
/// the clock once the estimate is derived.
pub fn coordinator_report(ctx: &RunContext, watch: &Stopwatch, partials: &[u64]) -> Result<Report> {
    let estimate = reduce_and_estimate(ctx, partials)?;
    let report = Report {
        estimate,
        elapsed: watch.elapsed(),
        hits: sum_hits(partials)?,
        total: ctx.total_budget(),
    };
    info!(
        world_size = ctx.world_size(),
        hits = report.hits,
        total = report.total,
        error = report.absolute_error(),
        samples_per_sec = ?report.samples_per_sec(),
        "estimate ready"
    );
    let shares = partition::shares(ctx.total_budget(), ctx.world_size())?;
    debug!(?shares, ?partials, "per-rank breakdown");
    Ok(report)
}

pub fn run_sequential<G: Rng + ?Sized>(total: u64, rng: &mut G) -> Result<Report> {
    let ctx = RunContext::sequential(total);
    run_participant(&ctx, &mut Solo, rng)?.ok_or(Error::IncompleteGather {
        expected: 1,
        got: 0,
    })
}

/// Runs `world_size` participants on their own threads and returns the
/// coordinator's report.
pub fn run_threads(total: u64, world_size: usize, seed: Option<u64>) -> Result<Report> {
    let members = ThreadGroup::new(world_size)?;

    let mut handles = vec![];
    for mut member in members {
        let handle = thread::spawn(move || {
            let ctx = RunContext::new(member.rank(), member.world_size(), total)?;
            let mut rng = participant_rng(seed, ctx.rank());
            run_participant(&ctx, &mut member, &mut rng)
        });
        handles.push(handle);
    }

    let mut report = None;
    for (rank, handle) in handles.into_iter().enumerate() {
        let outcome = handle
            .join()
            .map_err(|_| Error::ParticipantPanicked(rank))??;
        if outcome.is_some() {
            report = outcome;
        }
    }

    report.ok_or(Error::IncompleteGather {
        expected: world_size,
        got: 0,
    })
}
