//! Stretching a consumed sequence to cover the full unit cube.

use crate::error::Result;

use super::QuasiRandomSequence;

/// Linear per-dimension remap learned from a one-time replay of a sequence.
///
/// Raw low-discrepancy sequences rarely touch the exact boundary of the
/// cube, so the extremes of the search space stay unreachable after
/// quantile mapping. The rescaler replays the full budget once, records the
/// empirical minimum and maximum per dimension, and then remaps every
/// subsequent sample from `[min_i, max_i]` to `[0, 1]`.
///
/// Construction consumes and rewinds the generator; afterwards the
/// generator is back at its first position.
#[derive(Clone, Debug)]
pub struct Rescaler {
    mins: Vec<f64>,
    maxs: Vec<f64>,
}

impl Rescaler {
    /// Learn the empirical bounds of `sequence` by replaying `budget` points.
    ///
    /// # Errors
    ///
    /// Propagates any generator error raised during the replay.
    pub fn new(sequence: &mut QuasiRandomSequence, budget: usize) -> Result<Self> {
        sequence.reinitialize();
        let dimension = sequence.dimension();
        let mut mins = vec![f64::INFINITY; dimension];
        let mut maxs = vec![f64::NEG_INFINITY; dimension];
        for _ in 0..budget {
            let point = sequence.next_point()?;
            for (coord, (min, max)) in point.iter().zip(mins.iter_mut().zip(maxs.iter_mut())) {
                *min = min.min(*coord);
                *max = max.max(*coord);
            }
        }
        sequence.reinitialize();
        Ok(Self { mins, maxs })
    }

    /// Remap one sample from the learned bounds to `[0, 1]`.
    ///
    /// A degenerate dimension (`max == min`) maps to `0.5`.
    #[must_use]
    pub fn apply(&self, point: &[f64]) -> Vec<f64> {
        point
            .iter()
            .zip(self.mins.iter().zip(&self.maxs))
            .map(|(&x, (&min, &max))| {
                let span = max - min;
                if span > 0.0 {
                    ((x - min) / span).clamp(0.0, 1.0)
                } else {
                    0.5
                }
            })
            .collect()
    }
}
