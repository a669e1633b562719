//! Low-discrepancy sampling search.

use parking_lot::{Mutex, RwLock};

use crate::archive::Archive;
use crate::error::{Error, Result};
use crate::mapping::{self, DistributionKind};
use crate::optimizer::sequencer::{self, AskState, SequencerPlan};
use crate::optimizer::{OneShot, OppositionMode};
use crate::recommend::{self, RecommendationRule};
use crate::scale::ScaleSpec;
use crate::sequence::{QuasiRandomSequence, Rescaler, SequenceKind};

/// Configuration for [`SamplingSearch`].
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingSearchConfig {
    /// Which low-discrepancy construction feeds the stream.
    pub sequence: SequenceKind,
    /// Scramble the sequence's digit expansions; much better in high
    /// dimension and rarely worse than the plain sequence.
    pub scrambled: bool,
    /// Force the first candidate to the origin.
    pub middle_point: bool,
    /// Pair candidates with mirrored partners.
    pub opposition: Option<OppositionMode>,
    /// Quantile family used to map unit-cube samples to real space.
    pub distribution: DistributionKind,
    /// Scalar policy applied after quantile mapping.
    pub scale: ScaleSpec,
    /// Stretch the realized sequence so its samples span the whole unit
    /// cube before quantile mapping. Requires a finite budget.
    pub rescaled: bool,
    /// Rule used by [`SamplingSearch::recommend`](crate::OneShot::recommend).
    pub recommendation: RecommendationRule,
}

/// One-shot optimizer fed by a low-discrepancy sequence.
///
/// Each ask pulls the next quasi-random point, optionally remaps it through
/// the [`Rescaler`], converts it to an unbounded real vector via the
/// configured quantile family, and multiplies by the resolved scale.
/// Middle-point and opposition sequencing apply on top.
///
/// All configuration errors surface at construction: a budget-fixed
/// sequence (Hammersley, LHS), the rescaler, and the auto scale policy each
/// reject an unknown budget up front rather than degrading silently.
///
/// # Examples
///
/// ```
/// use oneshot::{OneShot, SamplingSearch, SamplingSearchConfig};
/// use oneshot::sequence::SequenceKind;
///
/// let config = SamplingSearchConfig {
///     sequence: SequenceKind::Hammersley,
///     scrambled: true,
///     ..SamplingSearchConfig::default()
/// };
/// let search = SamplingSearch::new(4, Some(32), 0, config).unwrap();
/// for _ in 0..32 {
///     let x = search.ask().unwrap();
///     let value = x.iter().map(|v| (v - 0.5) * (v - 0.5)).sum::<f64>();
///     search.tell(&x, value).unwrap();
/// }
/// let best = search.recommend().unwrap();
/// assert_eq!(best.len(), 4);
/// ```
pub struct SamplingSearch {
    dimension: usize,
    budget: Option<usize>,
    config: SamplingSearchConfig,
    plan: SequencerPlan,
    rng: Mutex<fastrand::Rng>,
    state: Mutex<AskState>,
    sequence: Mutex<QuasiRandomSequence>,
    rescaler: Option<Rescaler>,
    archive: RwLock<Archive>,
}

impl SamplingSearch {
    /// Create a sampling search instance.
    ///
    /// All randomness (scrambling permutations, LHS strata, quasi-opposition
    /// factors, random scales) derives from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDimension`] for a zero-dimensional space,
    /// [`Error::BudgetRequired`] when Hammersley, LHS, or rescaling is
    /// requested without a finite budget, and
    /// [`Error::AutoScaleUnsupported`] when the auto scale policy rejects
    /// the budget/dimension combination.
    pub fn new(
        dimension: usize,
        budget: Option<usize>,
        seed: u64,
        config: SamplingSearchConfig,
    ) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::ZeroDimension);
        }
        config.scale.validate(budget, dimension)?;

        let mut rng = fastrand::Rng::with_seed(seed);
        // The middle point consumes one output slot and opposition pairs
        // halve the fresh draws, so the generator sees a reduced budget.
        let internal_budget = budget.map(|b| {
            let b = b.saturating_sub(usize::from(config.middle_point));
            if config.opposition.is_some() {
                b.div_ceil(2)
            } else {
                b
            }
        });
        let mut sequence = QuasiRandomSequence::new(
            config.sequence,
            dimension,
            internal_budget,
            config.scrambled,
            &mut rng,
        )?;
        let rescaler = if config.rescaled {
            let Some(b) = internal_budget else {
                return Err(Error::BudgetRequired { what: "rescaling" });
            };
            Some(Rescaler::new(&mut sequence, b)?)
        } else {
            None
        };
        let plan = SequencerPlan {
            dimension,
            middle_point: config.middle_point,
            hold_middle_point: false,
            opposition: config.opposition,
        };
        Ok(Self {
            dimension,
            budget,
            config,
            plan,
            rng: Mutex::new(rng),
            state: Mutex::new(AskState::default()),
            sequence: Mutex::new(sequence),
            rescaler,
            archive: RwLock::new(Archive::new()),
        })
    }

    fn draw(&self, rng: &mut fastrand::Rng) -> Result<Vec<f64>> {
        let sample = self.sequence.lock().next_point()?;
        let sample = if let Some(rescaler) = &self.rescaler {
            rescaler.apply(&sample)
        } else {
            sample
        };
        let scale = self.config.scale.resolve(self.budget, self.dimension, rng)?;
        Ok(mapping::map(&sample, self.config.distribution, scale))
    }
}

impl OneShot for SamplingSearch {
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
        trace_debug!(ask = state.num_asks, "sampling search candidate");
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
        let archive = self.archive.read();
        let point = recommend::select(&archive, self.config.recommendation, self.dimension)?;
        trace_info!(archive_len = archive.len(), "sampling search recommendation");
        Ok(point)
    }
}
