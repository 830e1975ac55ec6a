use std::io::Write;
use std::time::{Duration, Instant};

use crate::error::Result;

/// Wall-clock timer for the computational phase of a run.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Stopwatch {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// What the reporting participant produces at the end of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub estimate: f64,
    pub elapsed: Duration,
    pub hits: u64,
    pub total: u64,
}

impl Report {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn absolute_error(&self) -> f64 {
        (self.estimate - std::f64::consts::PI).abs()
    }

    /// `None` when the run finished too fast for the clock to register.
    pub fn samples_per_sec(&self) -> Option<f64> {
        if self.elapsed.is_zero() {
            return None;
        }
        Some(self.total as f64 / self.elapsed_secs())
    }

    /// Writes the estimate and the elapsed seconds, one per line.
    pub fn emit<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.estimate)?;
        writeln!(out, "{}", self.elapsed_secs())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_estimate_then_seconds() {
        let report = Report {
            estimate: 3.5,
            elapsed: Duration::from_millis(1500),
            hits: 7,
            total: 8,
        };
        let mut out = Vec::new();
        report.emit(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3.5\n1.5\n");
    }

    #[test]
    fn throughput_needs_elapsed_time() {
        let mut report = Report {
            estimate: 3.0,
            elapsed: Duration::ZERO,
            hits: 3,
            total: 4,
        };
        assert_eq!(report.samples_per_sec(), None);
        report.elapsed = Duration::from_secs(2);
        assert_eq!(report.samples_per_sec(), Some(2.0));
    }

    #[test]
    fn stopwatch_moves_forward() {
        let watch = Stopwatch::start();
        std::thread::sleep(Duration::from_millis(2));
        assert!(watch.elapsed() >= Duration::from_millis(2));
    }
}
