//! Per-lane hazard rates and event sampling.
//!
//! Each lane `i` fires forward hops at rate `p[i]` and backward hops at rate
//! `q[i]`. Reducing the continuous-time process to a sequence of discrete
//! events, the next event belongs to lane `i` with probability proportional
//! to `p[i] + q[i]`, and is a forward hop with probability
//! `p[i] / (p[i] + q[i])`.

use asep_core::{ConfigError, Direction};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// Validated forward/backward hazard-rate vectors.
#[derive(Clone, Debug, PartialEq)]
pub struct HazardRates {
    p: Vec<f64>,
    q: Vec<f64>,
}

impl HazardRates {
    /// Build from explicit per-lane forward (`p`) and backward (`q`) rates.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::RateLengthMismatch`] if `p` and `q` differ in length
    /// - [`ConfigError::InvalidRate`] if any rate is negative or not finite
    /// - [`ConfigError::ZeroHazard`] if every rate is zero (or both are empty)
    pub fn new(p: Vec<f64>, q: Vec<f64>) -> Result<Self, ConfigError> {
        if q.len() != p.len() {
            return Err(ConfigError::RateLengthMismatch {
                which: "q",
                expected: p.len(),
                got: q.len(),
            });
        }
        for (which, rates) in [("p", &p), ("q", &q)] {
            if let Some((lane, &value)) = rates
                .iter()
                .enumerate()
                .find(|(_, v)| !v.is_finite() || **v < 0.0)
            {
                return Err(ConfigError::InvalidRate { which, lane, value });
            }
        }
        if p.iter().chain(&q).all(|&v| v == 0.0) {
            return Err(ConfigError::ZeroHazard);
        }
        Ok(Self { p, q })
    }

    /// The same `p` and `q` on every lane.
    pub fn uniform(lanes: usize, p: f64, q: f64) -> Result<Self, ConfigError> {
        Self::new(vec![p; lanes], vec![q; lanes])
    }

    /// Forward rates.
    pub fn forward(&self) -> &[f64] {
        &self.p
    }

    /// Backward rates.
    pub fn backward(&self) -> &[f64] {
        &self.q
    }

    /// Number of lanes the rates describe.
    pub fn lanes(&self) -> usize {
        self.p.len()
    }

    /// Total hazard `p[lane] + q[lane]`.
    pub fn total(&self, lane: usize) -> f64 {
        self.p[lane] + self.q[lane]
    }

    /// Check that there is exactly one rate per lane.
    pub fn check_lanes(&self, lanes: usize) -> Result<(), ConfigError> {
        if self.p.len() != lanes {
            return Err(ConfigError::RateLengthMismatch {
                which: "p",
                expected: lanes,
                got: self.p.len(),
            });
        }
        Ok(())
    }
}

/// Samples `(lane, direction)` events from a [`HazardRates`].
#[derive(Clone, Debug)]
pub struct EventSampler {
    lanes: WeightedIndex<f64>,
    forward_prob: Vec<f64>,
}

impl EventSampler {
    /// Precompute the lane distribution and per-lane forward probabilities.
    pub fn new(rates: &HazardRates) -> Result<Self, ConfigError> {
        let lanes = WeightedIndex::new((0..rates.lanes()).map(|i| rates.total(i)))
            .map_err(|_| ConfigError::ZeroHazard)?;
        let forward_prob = (0..rates.lanes())
            .map(|i| {
                let total = rates.total(i);
                if total > 0.0 {
                    rates.p[i] / total
                } else {
                    0.0
                }
            })
            .collect();
        Ok(Self {
            lanes,
            forward_prob,
        })
    }

    /// Draw the next event.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (usize, Direction) {
        let lane = self.lanes.sample(rng);
        let direction = if rng.random::<f64>() < self.forward_prob[lane] {
            Direction::Forward
        } else {
            Direction::Backward
        };
        (lane, direction)
    }
}
