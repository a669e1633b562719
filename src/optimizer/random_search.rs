//! Plain random search and its one-shot enrichments.

use parking_lot::{Mutex, RwLock};

use crate::archive::Archive;
use crate::error::{Error, Result};
use crate::mapping::DistributionKind;
use crate::optimizer::sequencer::{self, AskState, SequencerPlan};
use crate::optimizer::{OneShot, OppositionMode};
use crate::recommend::{self, RecommendationRule};
use crate::rng_util;
use crate::scale::ScaleSpec;

/// Configuration for [`RandomSearch`].
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomSearchConfig {
    /// Force the first candidate to the origin; useful in high dimension.
    pub middle_point: bool,
    /// Recommend a fresh random draw instead of consulting the archive.
    /// Only useful as a baseline.
    pub stupid: bool,
    /// Pair candidates with mirrored partners.
    pub opposition: Option<OppositionMode>,
    /// Draw from a Cauchy distribution instead of a Gaussian.
    pub distribution: DistributionKind,
    /// Scalar policy applied to every draw.
    pub scale: ScaleSpec,
    /// Rule used by [`RandomSearch::recommend`](crate::OneShot::recommend).
    pub recommendation: RecommendationRule,
}

/// One-shot optimizer drawing i.i.d. Gaussian or Cauchy candidates.
///
/// Each ask draws `dimension` independent values from the configured
/// distribution and multiplies them by the resolved scale. Middle-point and
/// opposition sequencing apply on top of the raw stream.
///
/// # Examples
///
/// ```
/// use oneshot::{OneShot, RandomSearch, RandomSearchConfig};
///
/// let search = RandomSearch::new(3, Some(16), 42, RandomSearchConfig::default()).unwrap();
/// for _ in 0..16 {
///     let x = search.ask().unwrap();
///     let value = x.iter().map(|v| v * v).sum::<f64>();
///     search.tell(&x, value).unwrap();
/// }
/// let best = search.recommend().unwrap();
/// assert_eq!(best.len(), 3);
/// ```
pub struct RandomSearch {
    dimension: usize,
    budget: Option<usize>,
    config: RandomSearchConfig,
    plan: SequencerPlan,
    rng: Mutex<fastrand::Rng>,
    state: Mutex<AskState>,
    archive: RwLock<Archive>,
}

impl RandomSearch {
    /// Create a random search instance.
    ///
    /// All randomness derives from `seed`; two instances built with the
    /// same arguments produce identical ask streams.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDimension`] for a zero-dimensional space and a
    /// configuration error when the scale policy rejects the
    /// budget/dimension combination.
    pub fn new(
        dimension: usize,
        budget: Option<usize>,
        seed: u64,
        config: RandomSearchConfig,
    ) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::ZeroDimension);
        }
        config.scale.validate(budget, dimension)?;
        let plan = SequencerPlan {
            dimension,
            middle_point: config.middle_point,
            // The origin is held for opposition; its negation is again the
            // origin, which is accepted behavior.
            hold_middle_point: true,
            opposition: config.opposition,
        };
        Ok(Self {
            dimension,
            budget,
            config,
            plan,
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
            state: Mutex::new(AskState::default()),
            archive: RwLock::new(Archive::new()),
        })
    }

    fn draw(&self, rng: &mut fastrand::Rng) -> Result<Vec<f64>> {
        let scale = self.config.scale.resolve(self.budget, self.dimension, rng)?;
        let point = (0..self.dimension)
            .map(|_| {
                let raw = match self.config.distribution {
                    DistributionKind::Gaussian => rng_util::standard_normal(rng),
                    DistributionKind::Cauchy => rng_util::standard_cauchy(rng),
                };
                scale * raw
            })
            .collect();
        Ok(point)
    }
}

impl OneShot for RandomSearch {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn budget(&self) -> Option<usize> {
        self.budget
    }

    fn ask(&self) -> Result<Vec<f64>> {
        let mut rng = self.rng.lock();
        let mut state = self.state.lock();
        let point = sequencer::step(&mut state, &self.plan, &mut rng, |rng| self.draw(rng))?;
        trace_debug!(ask = state.num_asks, "random search candidate");
        Ok(point)
    }

    fn tell(&self, point: &[f64], value: f64) -> Result<()> {
        if point.len() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                got: point.len(),
            });
        }
        self.archive.write().record(point, value);
        Ok(())
    }

    fn recommend(&self) -> Result<Vec<f64>> {
        if self.config.stupid {
            // Baseline behavior: a fresh ask-style draw, ignoring the
            // archive entirely. This advances the ask stream.
            return self.ask();
        }
        let archive = self.archive.read();
        let point = recommend::select(&archive, self.config.recommendation, self.dimension)?;
        trace_info!(archive_len = archive.len(), "random search recommendation");
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let config = RandomSearchConfig {
            opposition: Some(OppositionMode::Quasi),
            middle_point: true,
            ..RandomSearchConfig::default()
        };
        let a = RandomSearch::new(5, Some(20), 7, config).unwrap();
        let b = RandomSearch::new(5, Some(20), 7, config).unwrap();
        for _ in 0..20 {
            assert_eq!(a.ask().unwrap(), b.ask().unwrap());
        }
    }

    #[test]
    fn middle_point_only_on_first_ask() {
        let config = RandomSearchConfig {
            middle_point: true,
            ..RandomSearchConfig::default()
        };
        let search = RandomSearch::new(4, None, 0, config).unwrap();
        assert_eq!(search.ask().unwrap(), vec![0.0; 4]);
        for _ in 0..10 {
            assert_ne!(search.ask().unwrap(), vec![0.0; 4]);
        }
    }

    #[test]
    fn opposition_pairs_after_middle_point() {
        let config = RandomSearchConfig {
            middle_point: true,
            opposition: Some(OppositionMode::Opposite),
            ..RandomSearchConfig::default()
        };
        let search = RandomSearch::new(3, None, 1, config).unwrap();
        // Ask 0 is the origin; ask 1 is its held "opposite", again the origin.
        assert_eq!(search.ask().unwrap(), vec![0.0; 3]);
        assert_eq!(search.ask().unwrap(), vec![0.0; 3]);
        for _ in 0..5 {
            let base = search.ask().unwrap();
            let opposite = search.ask().unwrap();
            assert_eq!(opposite, base.iter().map(|x| -x).collect::<Vec<f64>>());
        }
    }

    #[test]
    fn scale_multiplies_every_coordinate() {
        let base = RandomSearch::new(4, None, 5, RandomSearchConfig::default()).unwrap();
        let scaled = RandomSearch::new(
            4,
            None,
            5,
            RandomSearchConfig {
                scale: ScaleSpec::Fixed(100.0),
                ..RandomSearchConfig::default()
            },
        )
        .unwrap();
        for _ in 0..10 {
            let a = base.ask().unwrap();
            let b = scaled.ask().unwrap();
            for (x, y) in a.iter().zip(&b) {
                assert!((100.0 * x - y).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn zero_scale_collapses_to_origin() {
        let search = RandomSearch::new(
            2,
            None,
            0,
            RandomSearchConfig {
                scale: ScaleSpec::Fixed(0.0),
                ..RandomSearchConfig::default()
            },
        )
        .unwrap();
        for _ in 0..5 {
            assert_eq!(search.ask().unwrap(), vec![0.0, 0.0]);
        }
    }

    #[test]
    fn tell_checks_dimension() {
        let search = RandomSearch::new(3, None, 0, RandomSearchConfig::default()).unwrap();
        assert!(matches!(
            search.tell(&[1.0, 2.0], 0.5),
            Err(Error::DimensionMismatch {
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn stupid_recommendation_ignores_the_archive() {
        let search = RandomSearch::new(
            2,
            None,
            0,
            RandomSearchConfig {
                stupid: true,
                ..RandomSearchConfig::default()
            },
        )
        .unwrap();
        search.tell(&[9.0, 9.0], -100.0).unwrap();
        let recommendation = search.recommend().unwrap();
        assert_eq!(recommendation.len(), 2);
        assert_ne!(recommendation, vec![9.0, 9.0]);
    }

    #[test]
    fn default_recommendation_is_pessimistic_best() {
        let search = RandomSearch::new(2, Some(8), 3, RandomSearchConfig::default()).unwrap();
        let mut best = (f64::INFINITY, Vec::new());
        for _ in 0..8 {
            let x = search.ask().unwrap();
            let value = x.iter().map(|v| v * v).sum::<f64>();
            if value < best.0 {
                best = (value, x.clone());
            }
            search.tell(&x, value).unwrap();
        }
        assert_eq!(search.recommend().unwrap(), best.1);
    }

    #[test]
    fn recommend_without_tell_is_an_error() {
        let search = RandomSearch::new(2, None, 0, RandomSearchConfig::default()).unwrap();
        assert!(matches!(search.recommend(), Err(Error::EmptyArchive)));
    }
}
