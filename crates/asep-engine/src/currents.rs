//! Per-lane particle current accumulators.
//!
//! Every non-blocked hop moves exactly one counter by the hop's direction:
//! a local exchange is credited to the type-1 current of the mover's lane,
//! a rotation to the type-2 current of that lane (the partner is carried a
//! full lap). The sum over both counter arrays therefore equals the
//! direction-weighted count of non-blocked hops.

use asep_core::{ConfigError, Direction, StepOutcome};

/// One entry of the mean-current time series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurrentSample {
    /// Lifetime step count when the sample was taken.
    pub total_steps: u64,
    /// Type-1 counters averaged over lanes.
    pub mean_type1: f64,
    /// Type-2 counters averaged over lanes.
    pub mean_type2: f64,
}

impl CurrentSample {
    /// Type-1 current per elementary step. Zero before the first step.
    pub fn type1_rate(&self) -> f64 {
        per_step(self.mean_type1, self.total_steps)
    }

    /// Type-2 current per elementary step. Zero before the first step.
    pub fn type2_rate(&self) -> f64 {
        per_step(self.mean_type2, self.total_steps)
    }
}

fn per_step(value: f64, steps: u64) -> f64 {
    if steps == 0 {
        0.0
    } else {
        value / steps as f64
    }
}

/// Signed per-lane current counters plus the mean-current series.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentCounters {
    curr1: Vec<i64>,
    curr2: Vec<i64>,
    samples: Vec<CurrentSample>,
}

impl CurrentCounters {
    /// Zeroed counters for `lanes` lanes.
    pub fn new(lanes: usize) -> Self {
        Self {
            curr1: vec![0; lanes],
            curr2: vec![0; lanes],
            samples: Vec::new(),
        }
    }

    /// Rebuild counters from persisted parts.
    ///
    /// Fails with [`ConfigError::ShapeMismatch`] if the two counter arrays
    /// differ in length.
    pub fn from_parts(
        curr1: Vec<i64>,
        curr2: Vec<i64>,
        samples: Vec<CurrentSample>,
    ) -> Result<Self, ConfigError> {
        if curr1.len() != curr2.len() {
            return Err(ConfigError::ShapeMismatch {
                expected: (curr1.len(), 0),
                got: (curr2.len(), 0),
            });
        }
        Ok(Self {
            curr1,
            curr2,
            samples,
        })
    }

    /// Number of lanes covered.
    pub fn lanes(&self) -> usize {
        self.curr1.len()
    }

    /// Credit one hop of `lane` in `direction`.
    #[inline]
    pub fn record(&mut self, lane: usize, direction: Direction, outcome: StepOutcome) {
        let delta = direction.sign() as i64;
        match outcome {
            StepOutcome::Blocked => {}
            StepOutcome::Swapped => self.curr1[lane] += delta,
            StepOutcome::Rotated => self.curr2[lane] += delta,
        }
    }

    /// Append one lane-averaged sample to the mean-current series.
    pub fn push_sample(&mut self, total_steps: u64) {
        let lanes = self.lanes().max(1) as f64;
        self.samples.push(CurrentSample {
            total_steps,
            mean_type1: self.curr1.iter().sum::<i64>() as f64 / lanes,
            mean_type2: self.curr2.iter().sum::<i64>() as f64 / lanes,
        });
    }

    /// Type-1 counters, indexed by lane.
    pub fn curr1(&self) -> &[i64] {
        &self.curr1
    }

    /// Type-2 counters, indexed by lane.
    pub fn curr2(&self) -> &[i64] {
        &self.curr2
    }

    /// The mean-current series, one entry per run, oldest first.
    pub fn samples(&self) -> &[CurrentSample] {
        &self.samples
    }

    /// Lane-averaged type-1 current of every sample.
    pub fn mean_curr1(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.mean_type1)
    }

    /// Lane-averaged type-2 current of every sample.
    pub fn mean_curr2(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.mean_type2)
    }

    /// `sum(curr1) + sum(curr2)`.
    pub fn net(&self) -> i64 {
        self.curr1.iter().chain(&self.curr2).sum()
    }

    /// Zero every counter and drop the series.
    pub fn clear(&mut self) {
        self.curr1.iter_mut().for_each(|c| *c = 0);
        self.curr2.iter_mut().for_each(|c| *c = 0);
        self.samples.clear();
    }
}
