//! End-to-end runs over the sequential and thread-group shapes.

use mc_pi::monte_carlo::{participant_rng, sample};
use mc_pi::partition::{share, shares};
use mc_pi::{
    estimate, reduce_and_estimate, run_participant, run_sequential, run_threads, Error, Reducer,
    RunContext, ThreadGroup,
};
use std::thread;

#[test]
fn uneven_budget_splits_three_three_two() {
    let all = shares(8, 3).unwrap();
    assert_eq!(all, vec![3, 3, 2]);
    assert_eq!(all.iter().sum::<u64>(), 8);
}

#[test]
fn world_of_one_matches_sequential() {
    let total = 50_000;
    assert_eq!(share(total, 0, 1).unwrap(), total);

    let sequential = run_sequential(total, &mut participant_rng(Some(11), 0)).unwrap();
    let distributed = run_threads(total, 1, Some(11)).unwrap();
    assert_eq!(sequential.hits, distributed.hits);
    assert_eq!(sequential.estimate, distributed.estimate);
}

#[test]
fn known_partials_give_one() {
    let ctx = RunContext::new(0, 3, 40).unwrap();
    assert_eq!(reduce_and_estimate(&ctx, &[3, 5, 2]).unwrap(), 1.0);
}

#[test]
fn zero_budget_samples_nothing_and_cannot_estimate() {
    for rank in 0..4 {
        let ctx = RunContext::new(rank, 4, 0).unwrap();
        assert_eq!(ctx.share(), 0);
        assert_eq!(sample(&mut participant_rng(None, rank), ctx.share()), 0);
    }
    assert!(matches!(estimate(0, 0), Err(Error::ZeroBudget)));
    assert!(matches!(run_threads(0, 4, Some(1)), Err(Error::ZeroBudget)));
}

#[test]
fn thread_group_estimate_is_close_to_pi() {
    let report = run_threads(1_000_003, 7, Some(2024)).unwrap();
    assert_eq!(report.total, 1_000_003);
    assert!(report.hits <= report.total);
    assert!((report.estimate - std::f64::consts::PI).abs() < 0.01);
}

#[test]
fn seeded_thread_runs_are_reproducible() {
    let a = run_threads(200_000, 4, Some(99)).unwrap();
    let b = run_threads(200_000, 4, Some(99)).unwrap();
    assert_eq!(a.hits, b.hits);
}

#[test]
fn only_the_coordinator_reports() {
    let world_size = 5;
    let members = ThreadGroup::new(world_size).unwrap();
    let handles: Vec<_> = members
        .into_iter()
        .map(|mut member| {
            thread::spawn(move || {
                let ctx = RunContext::new(member.rank(), world_size, 10_000).unwrap();
                let mut rng = participant_rng(Some(3), ctx.rank());
                (ctx.rank(), run_participant(&ctx, &mut member, &mut rng).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (rank, report) = handle.join().unwrap();
        assert_eq!(report.is_some(), rank == 0);
    }
}

#[test]
fn empty_world_is_a_configuration_error() {
    assert!(matches!(run_threads(10, 0, None), Err(Error::EmptyWorld)));
}
