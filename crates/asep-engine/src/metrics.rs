//! Per-run outcome counts and timing.

use asep_core::StepOutcome;

/// Counts and wall-clock time collected during a single
/// [`Simulation::run`](crate::Simulation::run) call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Elementary transitions attempted.
    pub steps: u64,
    /// Transitions refused by a type-1 neighbour.
    pub blocked: u64,
    /// Transitions resolved by a local exchange.
    pub swapped: u64,
    /// Transitions resolved by an arc rotation.
    pub rotated: u64,
    /// Wall-clock time for the whole run, in microseconds.
    pub elapsed_us: u64,
}

impl RunMetrics {
    /// Count one outcome.
    #[inline]
    pub fn record(&mut self, outcome: StepOutcome) {
        self.steps += 1;
        match outcome {
            StepOutcome::Blocked => self.blocked += 1,
            StepOutcome::Swapped => self.swapped += 1,
            StepOutcome::Rotated => self.rotated += 1,
        }
    }

    /// Fraction of attempted transitions that were blocked.
    pub fn blocked_fraction(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.blocked as f64 / self.steps as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = RunMetrics::default();
        assert_eq!(m.steps, 0);
        assert_eq!(m.blocked_fraction(), 0.0);
    }

    #[test]
    fn record_tallies_each_kind() {
        let mut m = RunMetrics::default();
        for outcome in [
            StepOutcome::Blocked,
            StepOutcome::Swapped,
            StepOutcome::Swapped,
            StepOutcome::Rotated,
        ] {
            m.record(outcome);
        }
        assert_eq!((m.steps, m.blocked, m.swapped, m.rotated), (4, 1, 2, 1));
        assert_eq!(m.blocked_fraction(), 0.25);
    }
}
