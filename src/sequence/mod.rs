//! Low-discrepancy sequence generators.
//!
//! [`QuasiRandomSequence`] produces points in the unit cube `[0, 1)^d` from
//! one of three deterministic constructions:
//!
//! - **Halton** — radical inverse in the first `d` prime bases. Works for
//!   any number of draws, but coordinates in high-index dimensions correlate
//!   unless scrambling is enabled.
//! - **Hammersley** — Halton with one coordinate replaced by the evenly
//!   spaced value `i/B`. Better discrepancy when the budget `B` is known;
//!   requires a finite budget.
//! - **Latin hypercube** — each axis is partitioned into `B` strata and
//!   every stratum is hit exactly once, in a pseudo-random order with
//!   in-stratum jitter. Requires a finite budget.
//!
//! Scrambling applies a pseudo-random digit permutation per prime base,
//! drawn once at construction, which breaks the correlation between
//! high-index Halton dimensions without losing determinism.
//!
//! Each call to [`next_point`](QuasiRandomSequence::next_point) consumes
//! exactly one position of the stream; [`reinitialize`](QuasiRandomSequence::reinitialize)
//! rewinds to the first position without touching the configuration, so a
//! replay reproduces the stream bit for bit.

mod rescaler;

pub use rescaler::Rescaler;

use crate::error::{Error, Result};

/// The family of low-discrepancy constructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceKind {
    /// Radical-inverse sequence in prime bases; tolerates unbounded draws.
    #[default]
    Halton,
    /// Halton with an evenly spaced `i/B` coordinate; budget-fixed.
    Hammersley,
    /// Latin hypercube sampling; budget-fixed.
    Lhs,
}

impl SequenceKind {
    /// Whether this construction needs the budget fixed up front and caps
    /// the number of draws at that budget.
    #[must_use]
    pub fn requires_budget(self) -> bool {
        matches!(self, Self::Hammersley | Self::Lhs)
    }

    fn name(self) -> &'static str {
        match self {
            Self::Halton => "the Halton sequence",
            Self::Hammersley => "the Hammersley sequence",
            Self::Lhs => "Latin hypercube sampling",
        }
    }
}

/// A deterministic point stream in the unit cube.
///
/// The generator owns its cursor exclusively; it is advanced by
/// [`next_point`](Self::next_point) and only ever rewound by
/// [`reinitialize`](Self::reinitialize).
///
/// # Examples
///
/// ```
/// use oneshot::sequence::{QuasiRandomSequence, SequenceKind};
///
/// let mut rng = fastrand::Rng::with_seed(0);
/// let mut seq =
///     QuasiRandomSequence::new(SequenceKind::Halton, 3, None, false, &mut rng).unwrap();
/// let point = seq.next_point().unwrap();
/// assert_eq!(point.len(), 3);
/// assert!(point.iter().all(|&x| (0.0..1.0).contains(&x)));
/// ```
#[derive(Clone, Debug)]
pub struct QuasiRandomSequence {
    kind: SequenceKind,
    dimension: usize,
    budget: Option<usize>,
    index: usize,
    /// Prime bases for the Halton coordinates (empty for pure LHS).
    bases: Vec<usize>,
    /// One digit permutation per base; identity when scrambling is off.
    permutations: Vec<Vec<usize>>,
    /// Precomputed LHS points, row-major `budget x dimension`.
    lhs_rows: Vec<f64>,
}

impl QuasiRandomSequence {
    /// Build a generator.
    ///
    /// Scrambling permutations and LHS strata are drawn from `rng` here and
    /// then frozen, so two generators built from identically seeded RNGs
    /// emit identical streams.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDimension`] if `dimension` is zero, and
    /// [`Error::BudgetRequired`] if a budget-fixed construction
    /// (Hammersley, LHS) is requested without a finite budget.
    pub fn new(
        kind: SequenceKind,
        dimension: usize,
        budget: Option<usize>,
        scrambling: bool,
        rng: &mut fastrand::Rng,
    ) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::ZeroDimension);
        }
        if kind.requires_budget() && budget.is_none() {
            return Err(Error::BudgetRequired { what: kind.name() });
        }

        let n_halton_dims = match kind {
            SequenceKind::Halton => dimension,
            // One coordinate is the even i/B spread.
            SequenceKind::Hammersley => dimension - 1,
            SequenceKind::Lhs => 0,
        };
        let bases = first_primes(n_halton_dims);
        let permutations = bases
            .iter()
            .map(|&base| digit_permutation(base, scrambling, rng))
            .collect();

        let lhs_rows = if kind == SequenceKind::Lhs {
            // A budget-fixed generator: precompute every row so that a
            // replay after reinitialize() is bit-identical.
            let b = budget.unwrap_or(0);
            latin_hypercube_rows(b, dimension, rng)
        } else {
            Vec::new()
        };

        Ok(Self {
            kind,
            dimension,
            budget,
            index: 0,
            bases,
            permutations,
            lhs_rows,
        })
    }

    /// The construction family.
    #[must_use]
    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    /// Number of coordinates per point.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The budget the generator was built for, if any.
    #[must_use]
    pub fn budget(&self) -> Option<usize> {
        self.budget
    }

    /// Produce the next point of the stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SequenceExhausted`] when a budget-fixed construction
    /// has already emitted all of its points. Halton never exhausts.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_point(&mut self) -> Result<Vec<f64>> {
        if let Some(budget) = self.budget {
            if self.kind.requires_budget() && self.index >= budget {
                return Err(Error::SequenceExhausted { budget });
            }
        }
        let i = self.index;
        self.index += 1;

        let point = match self.kind {
            SequenceKind::Halton => self.halton_point(i),
            SequenceKind::Hammersley => {
                // budget presence is checked at construction
                let b = self.budget.unwrap_or(1);
                let mut point = Vec::with_capacity(self.dimension);
                point.push(i as f64 / b as f64);
                point.extend(self.halton_point(i));
                point
            }
            SequenceKind::Lhs => {
                self.lhs_rows[i * self.dimension..(i + 1) * self.dimension].to_vec()
            }
        };
        Ok(point)
    }

    /// Rewind the stream to its first position.
    ///
    /// Configuration (scrambling permutations, LHS strata) is untouched, so
    /// the replayed stream matches the original exactly.
    pub fn reinitialize(&mut self) {
        self.index = 0;
    }

    /// Halton coordinates for draw `i` over the configured prime bases.
    ///
    /// Indices start at 1 so the all-zero point is never emitted.
    fn halton_point(&self, i: usize) -> Vec<f64> {
        self.bases
            .iter()
            .zip(&self.permutations)
            .map(|(&base, perm)| radical_inverse(i + 1, base, perm))
            .collect()
    }
}

/// Radical inverse of `i` in `base`, with the digit permutation applied.
#[allow(clippy::cast_precision_loss)]
fn radical_inverse(mut i: usize, base: usize, permutation: &[usize]) -> f64 {
    let b = base as f64;
    let mut inv = 1.0 / b;
    let mut value = 0.0;
    while i > 0 {
        value += permutation[i % base] as f64 * inv;
        i /= base;
        inv /= b;
    }
    value
}

/// Digit permutation for one base: identity, or a pseudo-random shuffle of
/// the non-zero digits. Zero stays fixed so leading digits do not shift the
/// whole sequence.
fn digit_permutation(base: usize, scrambling: bool, rng: &mut fastrand::Rng) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..base).collect();
    if scrambling && base > 2 {
        rng.shuffle(&mut permutation[1..]);
    }
    permutation
}

/// Precompute `budget` Latin hypercube points: per axis, one pseudo-random
/// permutation of the strata plus independent in-stratum jitter.
#[allow(clippy::cast_precision_loss)]
fn latin_hypercube_rows(budget: usize, dimension: usize, rng: &mut fastrand::Rng) -> Vec<f64> {
    let mut rows = vec![0.0; budget * dimension];
    for axis in 0..dimension {
        let mut strata: Vec<usize> = (0..budget).collect();
        rng.shuffle(&mut strata);
        for (row, &stratum) in strata.iter().enumerate() {
            rows[row * dimension + axis] = (stratum as f64 + rng.f64()) / budget as f64;
        }
    }
    rows
}

/// The first `n` primes, in order.
fn first_primes(n: usize) -> Vec<usize> {
    let mut primes: Vec<usize> = Vec::with_capacity(n);
    let mut candidate = 2;
    while primes.len() < n {
        if primes
            .iter()
            .take_while(|&&p| p * p <= candidate)
            .all(|&p| candidate % p != 0)
        {
            primes.push(candidate);
        }
        candidate += 1;
    }
    primes
}

#[cfg(test)]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
mod tests {
    use super::*;

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(0)
    }

    #[test]
    fn first_primes_are_correct() {
        assert_eq!(first_primes(0), Vec::<usize>::new());
        assert_eq!(first_primes(8), vec![2, 3, 5, 7, 11, 13, 17, 19]);
    }

    #[test]
    fn halton_base_2_prefix() {
        // Unscrambled base-2 van der Corput, starting at index 1:
        // 1/2, 1/4, 3/4, 1/8, ...
        let mut seq =
            QuasiRandomSequence::new(SequenceKind::Halton, 1, None, false, &mut rng()).unwrap();
        let expected = [0.5, 0.25, 0.75, 0.125];
        for &e in &expected {
            assert!((seq.next_point().unwrap()[0] - e).abs() < 1e-12);
        }
    }

    #[test]
    fn halton_points_are_distinct_and_in_unit_cube() {
        let mut seq =
            QuasiRandomSequence::new(SequenceKind::Halton, 4, Some(8), false, &mut rng()).unwrap();
        let points: Vec<Vec<f64>> = (0..8).map(|_| seq.next_point().unwrap()).collect();
        for p in &points {
            assert_eq!(p.len(), 4);
            assert!(p.iter().all(|&x| (0.0..1.0).contains(&x)));
        }
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                assert_ne!(points[i], points[j]);
            }
        }
        // Halton tolerates draws beyond the nominal budget.
        assert!(seq.next_point().is_ok());
    }

    #[test]
    fn hammersley_requires_budget() {
        assert!(matches!(
            QuasiRandomSequence::new(SequenceKind::Hammersley, 3, None, false, &mut rng()),
            Err(Error::BudgetRequired { .. })
        ));
    }

    #[test]
    fn hammersley_even_coordinate() {
        let mut seq =
            QuasiRandomSequence::new(SequenceKind::Hammersley, 3, Some(10), false, &mut rng())
                .unwrap();
        for i in 0..10 {
            let p = seq.next_point().unwrap();
            assert!((p[0] - i as f64 / 10.0).abs() < 1e-12);
        }
        assert!(matches!(
            seq.next_point(),
            Err(Error::SequenceExhausted { budget: 10 })
        ));
    }

    #[test]
    fn lhs_requires_budget_and_exhausts() {
        assert!(matches!(
            QuasiRandomSequence::new(SequenceKind::Lhs, 2, None, false, &mut rng()),
            Err(Error::BudgetRequired { .. })
        ));

        let mut seq =
            QuasiRandomSequence::new(SequenceKind::Lhs, 2, Some(5), false, &mut rng()).unwrap();
        for _ in 0..5 {
            seq.next_point().unwrap();
        }
        assert!(matches!(
            seq.next_point(),
            Err(Error::SequenceExhausted { budget: 5 })
        ));
    }

    #[test]
    fn lhs_hits_every_stratum_once_per_axis() {
        let budget = 16;
        let mut seq =
            QuasiRandomSequence::new(SequenceKind::Lhs, 3, Some(budget), false, &mut rng())
                .unwrap();
        let points: Vec<Vec<f64>> = (0..budget).map(|_| seq.next_point().unwrap()).collect();
        for axis in 0..3 {
            let mut strata: Vec<usize> = points
                .iter()
                .map(|p| (p[axis] * budget as f64).floor() as usize)
                .collect();
            strata.sort_unstable();
            assert_eq!(strata, (0..budget).collect::<Vec<_>>());
        }
    }

    #[test]
    fn reinitialize_replays_identically() {
        for kind in [SequenceKind::Halton, SequenceKind::Hammersley, SequenceKind::Lhs] {
            let mut seq = QuasiRandomSequence::new(kind, 3, Some(7), true, &mut rng()).unwrap();
            let first: Vec<Vec<f64>> = (0..7).map(|_| seq.next_point().unwrap()).collect();
            seq.reinitialize();
            let second: Vec<Vec<f64>> = (0..7).map(|_| seq.next_point().unwrap()).collect();
            assert_eq!(first, second, "replay mismatch for {kind:?}");
        }
    }

    #[test]
    fn scrambling_changes_the_stream_but_not_the_cube() {
        let mut plain =
            QuasiRandomSequence::new(SequenceKind::Halton, 6, None, false, &mut rng()).unwrap();
        let mut scrambled =
            QuasiRandomSequence::new(SequenceKind::Halton, 6, None, true, &mut rng()).unwrap();
        let mut any_different = false;
        for _ in 0..16 {
            let a = plain.next_point().unwrap();
            let b = scrambled.next_point().unwrap();
            assert!(b.iter().all(|&x| (0.0..1.0).contains(&x)));
            if a != b {
                any_different = true;
            }
        }
        assert!(any_different);
    }

    #[test]
    fn same_seed_same_stream() {
        let build = || {
            let mut r = fastrand::Rng::with_seed(99);
            QuasiRandomSequence::new(SequenceKind::Lhs, 4, Some(12), true, &mut r).unwrap()
        };
        let mut a = build();
        let mut b = build();
        for _ in 0..12 {
            assert_eq!(a.next_point().unwrap(), b.next_point().unwrap());
        }
    }
}
