use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Spreads consecutive ranks far apart in the seed space
const STREAM_SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

/// Random source owned by one participant.
///
/// With a master seed every rank gets its own reproducible stream, without one
/// each participant is seeded from OS entropy on its own.
pub fn participant_rng(seed: Option<u64>, rank: usize) -> StdRng {
    match seed {
        Some(master) => {
            StdRng::seed_from_u64(master.wrapping_add((rank as u64).wrapping_mul(STREAM_SPREAD)))
        }
        None => StdRng::from_entropy(),
    }
}

/// Draws `count` points uniformly from the unit square and returns how many
/// land strictly inside the quarter circle `x² + y² < 1`.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, count: u64) -> u64 {
    let mut inside = 0;
    for _ in 0..count {
        let x: f64 = rng.gen();
        let y: f64 = rng.gen();
        if x * x + y * y < 1.0 {
            inside += 1;
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_samples_draw_nothing() {
        let mut rng = participant_rng(Some(7), 0);
        let mut untouched = rng.clone();
        assert_eq!(sample(&mut rng, 0), 0);
        assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn seeded_streams_are_reproducible() {
        let a = sample(&mut participant_rng(Some(42), 3), 10_000);
        let b = sample(&mut participant_rng(Some(42), 3), 10_000);
        assert_eq!(a, b);
    }

    #[test]
    fn ranks_get_distinct_streams() {
        let mut r0 = participant_rng(Some(42), 0);
        let mut r1 = participant_rng(Some(42), 1);
        assert_ne!(r0.gen::<u64>(), r1.gen::<u64>());
    }

    #[test]
    fn hit_ratio_approaches_quarter_pi() {
        let n = 200_000;
        let hits = sample(&mut participant_rng(Some(1), 0), n);
        let ratio = hits as f64 / n as f64;
        assert!((ratio - std::f64::consts::FRAC_PI_4).abs() < 0.01, "ratio {ratio}");
    }

    proptest! {
        #[test]
        fn prop_hits_never_exceed_samples(seed in any::<u64>(), count in 0u64..5_000) {
            let hits = sample(&mut participant_rng(Some(seed), 0), count);
            prop_assert!(hits <= count);
        }
    }
}
