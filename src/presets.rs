//! Named one-shot configurations.
//!
//! The catalogue mirrors the classic one-shot families: plain and
//! opposition-based random search, Halton/Hammersley/LHS sampling with and
//! without scrambling, middle points, large/small/random scales, Cauchy
//! quantiles, rescaling, and the `Avg…` variants that recommend the average
//! of the best points. Presets are plain configuration records; building
//! one yields a fresh, independently seeded optimizer.
//!
//! # Examples
//!
//! ```
//! use oneshot::presets;
//! use oneshot::OneShot;
//!
//! let preset = presets::by_name("ScrHammersleySearch").unwrap();
//! let search = preset.build(4, Some(32), 0).unwrap();
//! let point = search.ask().unwrap();
//! assert_eq!(point.len(), 4);
//! ```

use crate::mapping::DistributionKind::Cauchy;
use crate::optimizer::OppositionMode::{Opposite, Quasi};
use crate::optimizer::{OneShot, RandomSearch, RandomSearchConfig, SamplingSearch, SamplingSearchConfig};
use crate::recommend::RecommendationRule::AverageOfBest;
use crate::scale::ScaleSpec::{Fixed, Random};
use crate::sequence::SequenceKind::{Hammersley, Lhs};
use crate::Result;

/// The variant a preset configures.
#[derive(Clone, Copy, Debug)]
pub enum PresetSpec {
    /// An i.i.d. [`RandomSearch`] configuration.
    Random(RandomSearchConfig),
    /// A low-discrepancy [`SamplingSearch`] configuration.
    Sampling(SamplingSearchConfig),
}

/// A named, immutable one-shot configuration.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    /// Catalogue name, e.g. `"QORandomSearch"`.
    pub name: &'static str,
    /// The configuration record.
    pub spec: PresetSpec,
}

impl Preset {
    /// Instantiate the preset for a concrete search space.
    ///
    /// # Errors
    ///
    /// Propagates the construction errors of the underlying variant, e.g.
    /// [`Error::BudgetRequired`](crate::Error::BudgetRequired) for a
    /// Hammersley or LHS preset built without a budget.
    pub fn build(
        &self,
        dimension: usize,
        budget: Option<usize>,
        seed: u64,
    ) -> Result<Box<dyn OneShot>> {
        match self.spec {
            PresetSpec::Random(config) => {
                Ok(Box::new(RandomSearch::new(dimension, budget, seed, config)?))
            }
            PresetSpec::Sampling(config) => Ok(Box::new(SamplingSearch::new(
                dimension, budget, seed, config,
            )?)),
        }
    }
}

const fn random(name: &'static str, config: RandomSearchConfig) -> Preset {
    Preset {
        name,
        spec: PresetSpec::Random(config),
    }
}

const fn sampling(name: &'static str, config: SamplingSearchConfig) -> Preset {
    Preset {
        name,
        spec: PresetSpec::Sampling(config),
    }
}

/// Baseline random-search configuration: unit Gaussian, pessimistic rule.
const RS: RandomSearchConfig = RandomSearchConfig {
    middle_point: false,
    stupid: false,
    opposition: None,
    distribution: crate::mapping::DistributionKind::Gaussian,
    scale: Fixed(1.0),
    recommendation: crate::recommend::RecommendationRule::Pessimistic,
};

/// Baseline sampling-search configuration: plain Halton, unit Gaussian.
const SS: SamplingSearchConfig = SamplingSearchConfig {
    sequence: crate::sequence::SequenceKind::Halton,
    scrambled: false,
    middle_point: false,
    opposition: None,
    distribution: crate::mapping::DistributionKind::Gaussian,
    scale: Fixed(1.0),
    rescaled: false,
    recommendation: crate::recommend::RecommendationRule::Pessimistic,
};

/// The full preset catalogue.
#[rustfmt::skip]
pub const PRESETS: &[Preset] = &[
    // Random-search family.
    random("Zero", RandomSearchConfig { scale: Fixed(0.0), ..RS }),
    random("RandomSearch", RS),
    random("QORandomSearch", RandomSearchConfig { opposition: Some(Quasi), ..RS }),
    random("ORandomSearch", RandomSearchConfig { opposition: Some(Opposite), ..RS }),
    random("RandomSearchPlusMiddlePoint", RandomSearchConfig { middle_point: true, ..RS }),
    random("LargerScaleRandomSearchPlusMiddlePoint", RandomSearchConfig { middle_point: true, scale: Fixed(500.0), ..RS }),
    random("SmallScaleRandomSearchPlusMiddlePoint", RandomSearchConfig { middle_point: true, scale: Fixed(0.01), ..RS }),
    random("StupidRandom", RandomSearchConfig { stupid: true, ..RS }),
    random("CauchyRandomSearch", RandomSearchConfig { distribution: Cauchy, ..RS }),
    random("RandomScaleRandomSearch", RandomSearchConfig { scale: Random, ..RS }),
    random("RandomScaleRandomSearchPlusMiddlePoint", RandomSearchConfig { scale: Random, middle_point: true, ..RS }),

    // Halton family.
    sampling("HaltonSearch", SS),
    sampling("HaltonSearchPlusMiddlePoint", SamplingSearchConfig { middle_point: true, ..SS }),
    sampling("LargeHaltonSearch", SamplingSearchConfig { scale: Fixed(100.0), ..SS }),
    sampling("LargeScrHaltonSearch", SamplingSearchConfig { scale: Fixed(100.0), scrambled: true, ..SS }),
    sampling("LargeHaltonSearchPlusMiddlePoint", SamplingSearchConfig { scale: Fixed(100.0), middle_point: true, ..SS }),
    sampling("SmallHaltonSearchPlusMiddlePoint", SamplingSearchConfig { scale: Fixed(0.01), middle_point: true, ..SS }),
    sampling("ScrHaltonSearch", SamplingSearchConfig { scrambled: true, ..SS }),
    sampling("ScrHaltonSearchPlusMiddlePoint", SamplingSearchConfig { middle_point: true, scrambled: true, ..SS }),
    sampling("LargeScrHaltonSearchPlusMiddlePoint", SamplingSearchConfig { scale: Fixed(100.0), middle_point: true, scrambled: true, ..SS }),
    sampling("SmallScrHaltonSearchPlusMiddlePoint", SamplingSearchConfig { scale: Fixed(0.01), middle_point: true, scrambled: true, ..SS }),

    // Hammersley family.
    sampling("HammersleySearch", SamplingSearchConfig { sequence: Hammersley, ..SS }),
    sampling("HammersleySearchPlusMiddlePoint", SamplingSearchConfig { sequence: Hammersley, middle_point: true, ..SS }),
    sampling("LargeHammersleySearchPlusMiddlePoint", SamplingSearchConfig { scale: Fixed(100.0), sequence: Hammersley, middle_point: true, ..SS }),
    sampling("SmallHammersleySearchPlusMiddlePoint", SamplingSearchConfig { scale: Fixed(0.01), sequence: Hammersley, middle_point: true, ..SS }),
    sampling("LargeScrHammersleySearchPlusMiddlePoint", SamplingSearchConfig { scrambled: true, scale: Fixed(100.0), sequence: Hammersley, middle_point: true, ..SS }),
    sampling("SmallScrHammersleySearchPlusMiddlePoint", SamplingSearchConfig { scrambled: true, scale: Fixed(0.01), sequence: Hammersley, middle_point: true, ..SS }),
    sampling("ScrHammersleySearchPlusMiddlePoint", SamplingSearchConfig { scrambled: true, sequence: Hammersley, middle_point: true, ..SS }),
    sampling("LargeHammersleySearch", SamplingSearchConfig { scale: Fixed(100.0), sequence: Hammersley, ..SS }),
    sampling("LargeScrHammersleySearch", SamplingSearchConfig { scale: Fixed(100.0), sequence: Hammersley, scrambled: true, ..SS }),
    sampling("ScrHammersleySearch", SamplingSearchConfig { sequence: Hammersley, scrambled: true, ..SS }),
    sampling("QOScrHammersleySearch", SamplingSearchConfig { sequence: Hammersley, scrambled: true, opposition: Some(Quasi), ..SS }),
    sampling("OScrHammersleySearch", SamplingSearchConfig { sequence: Hammersley, scrambled: true, opposition: Some(Opposite), ..SS }),
    sampling("RescaleScrHammersleySearch", SamplingSearchConfig { sequence: Hammersley, scrambled: true, rescaled: true, ..SS }),
    sampling("CauchyScrHammersleySearch", SamplingSearchConfig { distribution: Cauchy, sequence: Hammersley, scrambled: true, ..SS }),

    // Latin hypercube family.
    sampling("LHSSearch", SamplingSearchConfig { sequence: Lhs, ..SS }),
    sampling("CauchyLHSSearch", SamplingSearchConfig { sequence: Lhs, distribution: Cauchy, ..SS }),

    // Average-of-best counterparts.
    sampling("AvgHaltonSearch", SamplingSearchConfig { recommendation: AverageOfBest, ..SS }),
    sampling("AvgHaltonSearchPlusMiddlePoint", SamplingSearchConfig { middle_point: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgLargeHaltonSearch", SamplingSearchConfig { scale: Fixed(100.0), recommendation: AverageOfBest, ..SS }),
    sampling("AvgLargeScrHaltonSearch", SamplingSearchConfig { scale: Fixed(100.0), scrambled: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgLargeHaltonSearchPlusMiddlePoint", SamplingSearchConfig { scale: Fixed(100.0), middle_point: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgSmallHaltonSearchPlusMiddlePoint", SamplingSearchConfig { scale: Fixed(0.01), middle_point: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgScrHaltonSearch", SamplingSearchConfig { scrambled: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgScrHaltonSearchPlusMiddlePoint", SamplingSearchConfig { middle_point: true, scrambled: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgLargeScrHaltonSearchPlusMiddlePoint", SamplingSearchConfig { scale: Fixed(100.0), middle_point: true, scrambled: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgSmallScrHaltonSearchPlusMiddlePoint", SamplingSearchConfig { scale: Fixed(0.01), middle_point: true, scrambled: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgHammersleySearch", SamplingSearchConfig { sequence: Hammersley, recommendation: AverageOfBest, ..SS }),
    sampling("AvgHammersleySearchPlusMiddlePoint", SamplingSearchConfig { sequence: Hammersley, middle_point: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgLargeHammersleySearchPlusMiddlePoint", SamplingSearchConfig { scale: Fixed(100.0), sequence: Hammersley, middle_point: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgSmallHammersleySearchPlusMiddlePoint", SamplingSearchConfig { scale: Fixed(0.01), sequence: Hammersley, middle_point: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgLargeScrHammersleySearchPlusMiddlePoint", SamplingSearchConfig { scrambled: true, scale: Fixed(100.0), sequence: Hammersley, middle_point: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgSmallScrHammersleySearchPlusMiddlePoint", SamplingSearchConfig { scrambled: true, scale: Fixed(0.01), sequence: Hammersley, middle_point: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgScrHammersleySearchPlusMiddlePoint", SamplingSearchConfig { scrambled: true, sequence: Hammersley, middle_point: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgLargeHammersleySearch", SamplingSearchConfig { scale: Fixed(100.0), sequence: Hammersley, recommendation: AverageOfBest, ..SS }),
    sampling("AvgLargeScrHammersleySearch", SamplingSearchConfig { scale: Fixed(100.0), sequence: Hammersley, scrambled: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgScrHammersleySearch", SamplingSearchConfig { sequence: Hammersley, scrambled: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgRescaleScrHammersleySearch", SamplingSearchConfig { sequence: Hammersley, scrambled: true, rescaled: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgCauchyScrHammersleySearch", SamplingSearchConfig { distribution: Cauchy, sequence: Hammersley, scrambled: true, recommendation: AverageOfBest, ..SS }),
    sampling("AvgLHSSearch", SamplingSearchConfig { sequence: Lhs, recommendation: AverageOfBest, ..SS }),
    sampling("AvgCauchyLHSSearch", SamplingSearchConfig { sequence: Lhs, distribution: Cauchy, recommendation: AverageOfBest, ..SS }),
];

/// Look up a preset by its catalogue name.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name == name)
}
