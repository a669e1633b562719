//! One-shot optimizer variants and the ask/tell/recommend seam.

mod random_search;
mod sampling_search;
mod sequencer;

pub use random_search::{RandomSearch, RandomSearchConfig};
pub use sampling_search::{SamplingSearch, SamplingSearchConfig};

use crate::error::Result;

/// How opposition pairs each fresh candidate with a mirrored partner.
///
/// Opposition symmetrizes exploration around the origin: every other
/// candidate is a (scaled) negation of the previous one, so each region of
/// the search space is probed together with its mirror image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OppositionMode {
    /// Exact negation: the partner of `p` is `-p`.
    Opposite,
    /// Scaled negation: the partner of `p` is `-u * p` with a fresh uniform
    /// draw `u` in `[0, 1)` per pair.
    Quasi,
}

/// Ask/tell/recommend interface shared by the one-shot variants.
///
/// A one-shot optimizer proposes its whole batch without feedback: `ask`
/// never depends on previously told values, which is what lets callers
/// dispatch all evaluations to parallel workers up front. `tell` feeds
/// observed qualities (lower is better) into the archive, and `recommend`
/// selects the final answer from it.
///
/// Implementations are `Send + Sync`; all mutable state sits behind
/// per-instance locks, and nothing is shared between instances.
pub trait OneShot: Send + Sync {
    /// Number of coordinates in every candidate vector.
    fn dimension(&self) -> usize;

    /// Total evaluation budget, when known at construction.
    fn budget(&self) -> Option<usize>;

    /// Propose the next candidate point.
    ///
    /// # Errors
    ///
    /// Budget-fixed samplers return [`Error::SequenceExhausted`] once their
    /// points run out.
    ///
    /// [`Error::SequenceExhausted`]: crate::Error::SequenceExhausted
    fn ask(&self) -> Result<Vec<f64>>;

    /// Record the observed quality for a candidate (lower is better).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `point` has the wrong
    /// length.
    ///
    /// [`Error::DimensionMismatch`]: crate::Error::DimensionMismatch
    fn tell(&self, point: &[f64], value: f64) -> Result<()>;

    /// Select the final recommended point from everything told so far.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyArchive`] when recommendation needs the
    /// archive and nothing has been told.
    ///
    /// [`Error::EmptyArchive`]: crate::Error::EmptyArchive
    fn recommend(&self) -> Result<Vec<f64>>;
}
