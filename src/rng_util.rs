//! Draw helpers over [`fastrand::Rng`].
//!
//! Every random draw in the crate goes through the single per-instance
//! `fastrand::Rng`, so a fixed seed and a fixed call sequence reproduce the
//! exact same stream.

use core::f64::consts::TAU;

/// Draw from the standard normal distribution via the Box-Muller transform.
///
/// Consumes exactly two uniform draws per call.
pub(crate) fn standard_normal(rng: &mut fastrand::Rng) -> f64 {
    // rng.f64() is in [0, 1); flip it so the logarithm stays finite.
    let u1 = 1.0 - rng.f64();
    let u2 = rng.f64();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Draw from the standard Cauchy distribution.
///
/// Consumes exactly one uniform draw per call.
pub(crate) fn standard_cauchy(rng: &mut fastrand::Rng) -> f64 {
    crate::mapping::cauchy_ppf(rng.f64())
}
