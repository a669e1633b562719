//! Scale policies for spreading mapped candidates.

use crate::error::{Error, Result};
use crate::rng_util;

/// How the scalar multiplier applied after quantile mapping is chosen.
///
/// A fixed scale suits a search space whose geometry is known. [`Auto`]
/// widens the spread logarithmically with the budget relative to the
/// dimension, covering high-dimensional spaces without exploding variance.
/// [`Random`] is a cheap multi-scale ensemble: each ask gets an independent
/// log-normal scale without any adaptive feedback.
///
/// [`Auto`]: ScaleSpec::Auto
/// [`Random`]: ScaleSpec::Random
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleSpec {
    /// Always this value. `0.0` is allowed: the `Zero` preset collapses
    /// every candidate onto the origin.
    Fixed(f64),
    /// `(1 + ln B) / (4 ln d)`, evaluated fresh each ask. Requires a known
    /// budget `B > 1` and dimension `d > 1`.
    Auto,
    /// A fresh log-normal draw per ask: `exp(N(0,1) - 2) / sqrt(d)`.
    Random,
}

impl Default for ScaleSpec {
    fn default() -> Self {
        Self::Fixed(1.0)
    }
}

impl ScaleSpec {
    /// Reject parameter combinations this policy cannot serve.
    ///
    /// Called at optimizer construction so misconfiguration surfaces before
    /// the first ask.
    pub(crate) fn validate(self, budget: Option<usize>, dimension: usize) -> Result<()> {
        match self {
            Self::Fixed(s) if !s.is_finite() || s < 0.0 => Err(Error::InvalidScale(s)),
            Self::Auto if budget.is_none_or(|b| b <= 1) || dimension <= 1 => {
                Err(Error::AutoScaleUnsupported { budget, dimension })
            }
            _ => Ok(()),
        }
    }

    /// Resolve the policy into the concrete scalar for one ask.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn resolve(
        self,
        budget: Option<usize>,
        dimension: usize,
        rng: &mut fastrand::Rng,
    ) -> Result<f64> {
        match self {
            Self::Fixed(s) => Ok(s),
            Self::Auto => {
                let Some(b) = budget.filter(|&b| b > 1) else {
                    return Err(Error::AutoScaleUnsupported { budget, dimension });
                };
                if dimension <= 1 {
                    return Err(Error::AutoScaleUnsupported { budget, dimension });
                }
                Ok((1.0 + (b as f64).ln()) / (4.0 * (dimension as f64).ln()))
            }
            Self::Random => {
                Ok((rng_util::standard_normal(rng) - 2.0).exp() / (dimension as f64).sqrt())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn fixed_passes_through() {
        let mut rng = fastrand::Rng::with_seed(0);
        assert_eq!(
            ScaleSpec::Fixed(3.5).resolve(None, 1, &mut rng).unwrap(),
            3.5
        );
        assert_eq!(
            ScaleSpec::Fixed(0.0).resolve(Some(10), 4, &mut rng).unwrap(),
            0.0
        );
    }

    #[test]
    fn fixed_rejects_negative_and_non_finite() {
        assert!(matches!(
            ScaleSpec::Fixed(-1.0).validate(Some(10), 4),
            Err(Error::InvalidScale(_))
        ));
        assert!(matches!(
            ScaleSpec::Fixed(f64::NAN).validate(Some(10), 4),
            Err(Error::InvalidScale(_))
        ));
    }

    #[test]
    fn auto_matches_formula() {
        let mut rng = fastrand::Rng::with_seed(0);
        let scale = ScaleSpec::Auto.resolve(Some(100), 5, &mut rng).unwrap();
        let expected = (1.0 + 100f64.ln()) / (4.0 * 5f64.ln());
        assert!((scale - expected).abs() < 1e-12);
        assert!((scale - 0.8707).abs() < 1e-3);
    }

    #[test]
    fn auto_requires_budget_and_dimension_above_one() {
        assert!(matches!(
            ScaleSpec::Auto.validate(None, 5),
            Err(Error::AutoScaleUnsupported { .. })
        ));
        assert!(matches!(
            ScaleSpec::Auto.validate(Some(1), 5),
            Err(Error::AutoScaleUnsupported { .. })
        ));
        assert!(matches!(
            ScaleSpec::Auto.validate(Some(100), 1),
            Err(Error::AutoScaleUnsupported { .. })
        ));
        assert!(ScaleSpec::Auto.validate(Some(2), 2).is_ok());
    }

    #[test]
    fn random_is_positive_and_varies() {
        let mut rng = fastrand::Rng::with_seed(42);
        let draws: Vec<f64> = (0..50)
            .map(|_| ScaleSpec::Random.resolve(None, 4, &mut rng).unwrap())
            .collect();
        assert!(draws.iter().all(|&s| s > 0.0 && s.is_finite()));
        let first = draws[0];
        assert!(draws.iter().any(|&s| (s - first).abs() > 1e-9));
    }
}
