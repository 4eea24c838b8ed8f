//! Parallel batch scoring over string collections.
//!
//! Thin rayon wrappers around the two shingle metrics, for deduplication
//! and record-linkage workloads that score many pairs at once. Every pair
//! gets its own profiling session, so the parallel splits share nothing.

use rayon::prelude::*;

use crate::algorithms::normalize::{normalize_pair, NormalizationMode};
use crate::algorithms::{QGram, SorensenDice};
use crate::error::ShingleError;

fn check_paired_lengths(left: usize, right: usize) -> Result<(), ShingleError> {
    if left != right {
        return Err(ShingleError::LengthMismatch { left, right });
    }
    Ok(())
}

/// Element-wise Q-gram distance over two equal-length slices.
///
/// # Errors
/// Returns [`ShingleError::InvalidShingleLength`] if `k` is zero and
/// [`ShingleError::LengthMismatch`] if the slices differ in length.
pub fn batch_qgram_distance<S>(
    left: &[S],
    right: &[S],
    k: usize,
    normalize: Option<NormalizationMode>,
) -> Result<Vec<f64>, ShingleError>
where
    S: AsRef<str> + Sync,
{
    let metric = QGram::new(k)?;
    check_paired_lengths(left.len(), right.len())?;

    Ok(left
        .par_iter()
        .zip(right.par_iter())
        .map(|(a, b)| match normalize {
            Some(mode) => {
                let (a, b) = normalize_pair(a.as_ref(), b.as_ref(), mode);
                metric.distance(&a, &b)
            }
            None => metric.distance(a.as_ref(), b.as_ref()),
        })
        .collect())
}

/// Element-wise Sørensen-Dice similarity over two equal-length slices.
///
/// # Errors
/// Returns [`ShingleError::InvalidShingleLength`] if `k` is zero and
/// [`ShingleError::LengthMismatch`] if the slices differ in length.
pub fn batch_dice_similarity<S>(
    left: &[S],
    right: &[S],
    k: usize,
    normalize: Option<NormalizationMode>,
) -> Result<Vec<f64>, ShingleError>
where
    S: AsRef<str> + Sync,
{
    let metric = SorensenDice::new(k)?;
    check_paired_lengths(left.len(), right.len())?;

    Ok(left
        .par_iter()
        .zip(right.par_iter())
        .map(|(a, b)| match normalize {
            Some(mode) => {
                let (a, b) = normalize_pair(a.as_ref(), b.as_ref(), mode);
                metric.similarity(&a, &b)
            }
            None => metric.similarity(a.as_ref(), b.as_ref()),
        })
        .collect())
}

/// Pairwise Sørensen-Dice similarity matrix between two lists of strings.
///
/// `result[i][j]` is the similarity of `queries[i]` and `choices[j]`.
///
/// # Errors
/// Returns [`ShingleError::InvalidShingleLength`] if `k` is zero.
pub fn dice_cdist<S>(queries: &[S], choices: &[S], k: usize) -> Result<Vec<Vec<f64>>, ShingleError>
where
    S: AsRef<str> + Sync,
{
    let metric = SorensenDice::new(k)?;

    Ok(queries
        .par_iter()
        .map(|q| {
            choices
                .iter()
                .map(|c| metric.similarity(q.as_ref(), c.as_ref()))
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_qgram_pairs() {
        let left = ["night", "abc", ""];
        let right = ["nacht", "abc", "abc"];
        let distances = batch_qgram_distance(&left, &right, 2, None).unwrap();
        assert_eq!(distances, vec![6.0, 0.0, 2.0]);
    }

    #[test]
    fn test_batch_dice_pairs() {
        let left = ["night", "ab"];
        let right = ["nacht", "xy"];
        let scores = batch_dice_similarity(&left, &right, 2, None).unwrap();
        assert_eq!(scores, vec![0.25, 0.0]);
    }

    #[test]
    fn test_batch_normalization() {
        let left = ["NIGHT"];
        let right = ["night"];
        let raw = batch_dice_similarity(&left, &right, 2, None).unwrap();
        let folded =
            batch_dice_similarity(&left, &right, 2, Some(NormalizationMode::Lowercase)).unwrap();
        assert_eq!(raw, vec![0.0]);
        assert_eq!(folded, vec![1.0]);
    }

    #[test]
    fn test_length_mismatch() {
        let left = ["a", "b"];
        let right = ["a"];
        assert_eq!(
            batch_qgram_distance(&left, &right, 2, None),
            Err(ShingleError::LengthMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_invalid_k_reported_before_work() {
        let rows: [&str; 0] = [];
        assert_eq!(
            dice_cdist(&rows, &rows, 0),
            Err(ShingleError::InvalidShingleLength { k: 0 })
        );
    }

    #[test]
    fn test_cdist_shape_and_values() {
        let queries = ["night", "nacht"];
        let choices = ["night", "nacht", ""];
        let matrix = dice_cdist(&queries, &choices, 2).unwrap();
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[0], vec![1.0, 0.25, 0.0]);
        assert_eq!(matrix[1], vec![0.25, 1.0, 0.0]);
    }
}
