//! Quantile mapping from the unit cube to real space.
//!
//! Low-discrepancy samples live in `[0, 1)^d`; the optimizers work on an
//! unbounded real domain. The bridge is the inverse CDF of a standard
//! Gaussian or Cauchy distribution applied independently per coordinate,
//! followed by a scalar multiplication (see [`ScaleSpec`](crate::ScaleSpec)).
//!
//! Inputs at exactly 0 or 1 would map to infinity; they are expected
//! artifacts of floating-point sequence generation and are silently clamped
//! into `[EPS, 1 - EPS]` instead of raising.

/// Distribution used when mapping unit-cube samples to the real line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionKind {
    /// Standard Gaussian quantiles; most mass within a few units of zero.
    #[default]
    Gaussian,
    /// Standard Cauchy quantiles; heavy tails reach far from the origin.
    Cauchy,
}

/// Distance kept between quantile inputs and the 0/1 singularities.
const UNIT_EPS: f64 = 1e-12;

#[inline]
fn clamp_unit(p: f64) -> f64 {
    p.clamp(UNIT_EPS, 1.0 - UNIT_EPS)
}

/// Inverse CDF of the standard normal distribution.
///
/// Acklam's rational approximation; absolute relative error below 1.2e-9
/// over the open unit interval.
#[allow(clippy::unreadable_literal)]
pub(crate) fn norm_ppf(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];
    const P_LOW: f64 = 0.02425;

    let p = clamp_unit(p);
    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -((((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0))
    }
}

/// Inverse CDF of the standard Cauchy distribution.
pub(crate) fn cauchy_ppf(p: f64) -> f64 {
    (core::f64::consts::PI * (clamp_unit(p) - 0.5)).tan()
}

/// Map a unit-cube sample to a scaled real vector via the inverse CDF of `kind`.
pub(crate) fn map(point: &[f64], kind: DistributionKind, scale: f64) -> Vec<f64> {
    let ppf: fn(f64) -> f64 = match kind {
        DistributionKind::Gaussian => norm_ppf,
        DistributionKind::Cauchy => cauchy_ppf,
    };
    point.iter().map(|&p| scale * ppf(p)).collect()
}
