//! Archive of evaluated points and their running quality statistics.
//!
//! The archive is consumed read-only by the recommendation rules. Points
//! are keyed by their exact coordinate bit patterns, so telling the same
//! vector twice folds into one entry with running statistics rather than
//! creating a duplicate. The engine minimizes: lower values are better.

use std::collections::HashMap;

/// Running quality statistics for one archived point.
#[derive(Clone, Debug)]
pub struct ArchiveEntry {
    point: Vec<f64>,
    count: u64,
    mean: f64,
    /// Welford's sum of squared deviations.
    m2: f64,
}

impl ArchiveEntry {
    fn new(point: Vec<f64>, value: f64) -> Self {
        Self {
            point,
            count: 1,
            mean: value,
            m2: 0.0,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn update(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// The evaluated candidate vector.
    #[must_use]
    pub fn point(&self) -> &[f64] {
        &self.point
    }

    /// How many observations were folded into this entry.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean of all observed values for this point.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Conservative quality summary: the mean plus one standard error.
    ///
    /// With a single observation this is just the observed value; repeated
    /// noisy observations push the estimate up (worse, under minimization)
    /// in proportion to their spread.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pessimistic(&self) -> f64 {
        if self.count < 2 {
            return self.mean;
        }
        let variance = self.m2 / (self.count - 1) as f64;
        self.mean + (variance / self.count as f64).sqrt()
    }
}

/// Insertion-ordered store of `(point, quality statistics)` pairs.
///
/// # Examples
///
/// ```
/// use oneshot::Archive;
///
/// let mut archive = Archive::new();
/// archive.record(&[1.0, 2.0], 3.5);
/// archive.record(&[0.0, 0.0], 1.0);
/// let best = archive.pessimistic_best().unwrap();
/// assert_eq!(best.point(), &[0.0, 0.0]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Archive {
    entries: Vec<ArchiveEntry>,
    index: HashMap<Vec<u64>, usize>,
}

impl Archive {
    /// Create an empty archive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(point: &[f64]) -> Vec<u64> {
        point.iter().map(|x| x.to_bits()).collect()
    }

    /// Record one observation for `point`.
    ///
    /// A point seen before (bit-exact) updates its running statistics; a
    /// new point appends an entry, preserving insertion order.
    pub fn record(&mut self, point: &[f64], value: f64) {
        match self.index.entry(Self::key(point)) {
            std::collections::hash_map::Entry::Occupied(slot) => {
                self.entries[*slot.get()].update(value);
            }
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push(ArchiveEntry::new(point.to_vec(), value));
            }
        }
    }

    /// Number of distinct archived points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, ArchiveEntry> {
        self.entries.iter()
    }

    /// The entry with the lowest pessimistic estimate.
    ///
    /// Ties keep the earliest inserted entry. `None` when empty.
    #[must_use]
    pub fn pessimistic_best(&self) -> Option<&ArchiveEntry> {
        self.entries
            .iter()
            .reduce(|best, entry| {
                if entry.pessimistic() < best.pessimistic() {
                    entry
                } else {
                    best
                }
            })
    }
}

impl<'a> IntoIterator for &'a Archive {
    type Item = &'a ArchiveEntry;
    type IntoIter = core::slice::Iter<'a, ArchiveEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
