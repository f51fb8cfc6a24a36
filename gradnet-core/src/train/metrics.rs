use crate::error::GradNetError;

/// Fraction of records whose first score and first label fall on the same
/// side of `threshold` (strictly greater counts as positive).
///
/// # Errors
/// * `BatchSizeMismatch` if `scores` and `labels` differ in record count.
/// * `EmptyBatch` if there are no records.
/// * `DimensionMismatch` if a record has no score or no label.
pub fn accuracy(scores: &[Vec<f64>], labels: &[Vec<f64>], threshold: f64) -> Result<f64, GradNetError> {
    if scores.len() != labels.len() {
        return Err(GradNetError::BatchSizeMismatch {
            inputs: scores.len(),
            labels: labels.len(),
        });
    }
    if scores.is_empty() {
        return Err(GradNetError::EmptyBatch {
            operation: "accuracy".to_string(),
        });
    }

    let mut correct = 0usize;
    for (score, label) in scores.iter().zip(labels) {
        let (&score, &label) = match (score.first(), label.first()) {
            (Some(s), Some(l)) => (s, l),
            _ => {
                return Err(GradNetError::DimensionMismatch {
                    expected: 1,
                    actual: 0,
                    operation: "accuracy".to_string(),
                })
            }
        };
        if (score > threshold) == (label > threshold) {
            correct += 1;
        }
    }
    Ok(correct as f64 / scores.len() as f64)
}
