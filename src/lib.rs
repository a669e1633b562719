#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! One-shot, derivative-free black-box optimization.
//!
//! A one-shot optimizer proposes its entire batch of candidate points up
//! front, with no feedback from earlier evaluations, which lets callers
//! fan all evaluations out to parallel workers. After the results come
//! back, a single recommended point is selected from the archive.
//!
//! # Getting Started
//!
//! ```
//! use oneshot::prelude::*;
//!
//! # fn main() -> oneshot::Result<()> {
//! let config = SamplingSearchConfig {
//!     scrambled: true,
//!     ..SamplingSearchConfig::default()
//! };
//! let search = SamplingSearch::new(4, Some(32), 0, config)?;
//!
//! // Ask for the whole batch, evaluate, tell.
//! for _ in 0..32 {
//!     let x = search.ask()?;
//!     let value = x.iter().map(|v| (v - 1.0) * (v - 1.0)).sum::<f64>();
//!     search.tell(&x, value)?;
//! }
//!
//! let best = search.recommend()?;
//! assert_eq!(best.len(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`OneShot`] | Ask/tell/recommend interface shared by all variants. |
//! | [`SamplingSearch`] | Candidates from a low-discrepancy sequence (Halton, Hammersley, LHS) mapped to real space. |
//! | [`RandomSearch`] | Candidates from i.i.d. Gaussian or Cauchy draws. |
//! | [`ScaleSpec`] | Fixed, budget-derived, or randomized per-ask scaling. |
//! | [`OppositionMode`] | Pair every candidate with its (scaled) negation. |
//! | [`RecommendationRule`] | Pessimistic best or average of the k best. |
//! | [`presets`] | The named configuration catalogue (`"ScrHammersleySearch"`, …). |
//!
//! # Determinism
//!
//! Every instance owns a single [`fastrand::Rng`] seeded at construction;
//! sequences, scrambling, jitter, opposition factors, and random scales all
//! draw from that one stream. A fixed seed and a fixed call sequence
//! reproduce candidate vectors bit for bit.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on configuration types | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at ask and recommend | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod archive;
mod error;
mod mapping;
mod optimizer;
pub mod presets;
mod recommend;
mod rng_util;
mod scale;
pub mod sequence;

pub use archive::{Archive, ArchiveEntry};
pub use error::{Error, Result};
pub use mapping::DistributionKind;
pub use optimizer::{
    OneShot, OppositionMode, RandomSearch, RandomSearchConfig, SamplingSearch,
    SamplingSearchConfig,
};
pub use recommend::RecommendationRule;
pub use scale::ScaleSpec;
pub use sequence::{QuasiRandomSequence, Rescaler, SequenceKind};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use oneshot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::archive::{Archive, ArchiveEntry};
    pub use crate::error::{Error, Result};
    pub use crate::mapping::DistributionKind;
    pub use crate::optimizer::{
        OneShot, OppositionMode, RandomSearch, RandomSearchConfig, SamplingSearch,
        SamplingSearchConfig,
    };
    pub use crate::presets::{self, Preset, PresetSpec};
    pub use crate::recommend::RecommendationRule;
    pub use crate::scale::ScaleSpec;
    pub use crate::sequence::{QuasiRandomSequence, Rescaler, SequenceKind};
}
