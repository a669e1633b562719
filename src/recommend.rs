//! Final-answer selection over the evaluation archive.

use crate::archive::{Archive, ArchiveEntry};
use crate::error::{Error, Result};

/// Rule used to pick the single recommended point after all evaluations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecommendationRule {
    /// The archived point with the best (lowest) pessimistic estimate.
    #[default]
    Pessimistic,
    /// Coordinate-wise mean of the `k` best points by pessimistic estimate,
    /// with `k = max(1, min(dimension, |archive| / 4))`.
    AverageOfBest,
}

/// Apply `rule` to `archive`.
///
/// # Errors
///
/// Returns [`Error::EmptyArchive`] when nothing has been recorded.
pub(crate) fn select(
    archive: &Archive,
    rule: RecommendationRule,
    dimension: usize,
) -> Result<Vec<f64>> {
    match rule {
        RecommendationRule::Pessimistic => archive
            .pessimistic_best()
            .map(|entry| entry.point().to_vec())
            .ok_or(Error::EmptyArchive),
        RecommendationRule::AverageOfBest => average_of_k_best(archive, dimension),
    }
}

#[allow(clippy::cast_precision_loss)]
fn average_of_k_best(archive: &Archive, dimension: usize) -> Result<Vec<f64>> {
    if archive.is_empty() {
        return Err(Error::EmptyArchive);
    }
    let k = (archive.len() / 4).min(dimension).max(1);
    let mut ranked: Vec<&ArchiveEntry> = archive.iter().collect();
    // Stable sort: equal estimates keep insertion order.
    ranked.sort_by(|a, b| a.pessimistic().total_cmp(&b.pessimistic()));

    let mut mean = vec![0.0; dimension];
    for entry in &ranked[..k] {
        for (m, &x) in mean.iter_mut().zip(entry.point()) {
            *m += x;
        }
    }
    for m in &mut mean {
        *m /= k as f64;
    }
    Ok(mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archive_of(values: &[(f64, f64)]) -> Archive {
        let mut archive = Archive::new();
        for &(x, v) in values {
            archive.record(&[x, -x], v);
        }
        archive
    }

    #[test]
    fn empty_archive_is_a_usage_error() {
        let archive = Archive::new();
        assert!(matches!(
            select(&archive, RecommendationRule::Pessimistic, 2),
            Err(Error::EmptyArchive)
        ));
        assert!(matches!(
            select(&archive, RecommendationRule::AverageOfBest, 2),
            Err(Error::EmptyArchive)
        ));
    }

    #[test]
    fn small_archive_average_equals_pessimistic_best() {
        // |archive| < 4 forces k = 1, so both rules agree.
        let archive = archive_of(&[(1.0, 5.0), (2.0, 2.0), (3.0, 7.0)]);
        let best = select(&archive, RecommendationRule::Pessimistic, 2).unwrap();
        let avg = select(&archive, RecommendationRule::AverageOfBest, 2).unwrap();
        assert_eq!(best, avg);
        assert_eq!(best, vec![2.0, -2.0]);
    }

    #[test]
    fn average_uses_k_best() {
        // 8 entries, dimension 2 -> k = min(2, 8/4) = 2; the two best are
        // x=5 (value 0) and x=6 (value 1).
        let archive = archive_of(&[
            (1.0, 10.0),
            (2.0, 9.0),
            (3.0, 8.0),
            (4.0, 7.0),
            (5.0, 0.0),
            (6.0, 1.0),
            (7.0, 6.0),
            (8.0, 5.0),
        ]);
        let avg = select(&archive, RecommendationRule::AverageOfBest, 2).unwrap();
        assert_eq!(avg, vec![5.5, -5.5]);
    }

    #[test]
    fn k_is_capped_by_dimension() {
        let mut archive = Archive::new();
        for i in 0..40 {
            archive.record(&[f64::from(i)], f64::from(i));
        }
        // dimension 1 caps k at 1, so the average is exactly the best point.
        let avg = select(&archive, RecommendationRule::AverageOfBest, 1).unwrap();
        assert_eq!(avg, vec![0.0]);
    }

    #[test]
    fn equal_estimates_keep_insertion_order() {
        let mut archive = Archive::new();
        archive.record(&[9.0], 1.0);
        archive.record(&[1.0], 1.0);
        archive.record(&[2.0], 1.0);
        let avg = select(&archive, RecommendationRule::AverageOfBest, 1).unwrap();
        assert_eq!(avg, vec![9.0]);
    }
}
