use crate::autograd::{Graph, NodeId};
use crate::error::GradNetError;
use crate::nn::module::Module;
use crate::train::TrainingParam;

/// Replaces each score by `exp(score) / Σ exp(scores)`.
///
/// Records with fewer than two scores are left untouched: a single sigmoid
/// output is already a probability.
pub fn softmax_in_place(graph: &mut Graph, scores: &mut [NodeId]) {
    if scores.len() < 2 {
        return;
    }
    let mut sum = graph.leaf(0.0);
    for score in scores.iter_mut() {
        *score = graph.exp(*score);
        sum = graph.add(sum, *score);
    }
    for score in scores.iter_mut() {
        *score = graph.div(*score, sum);
    }
}

/// `coefficient * Σ p²` over every parameter of `module`, as a graph node.
pub fn l2_penalty<M: Module + ?Sized>(graph: &mut Graph, module: &M, coefficient: f64) -> NodeId {
    let mut norm = graph.leaf(0.0);
    for param in module.parameters() {
        let square = graph.pow(param, 2.0);
        norm = graph.add(norm, square);
    }
    let coefficient = graph.leaf(coefficient);
    graph.mul(norm, coefficient)
}

/// Binary cross-entropy averaged over the batch, plus an optional L2 term.
///
/// For each record, multi-output scores are first normalized with
/// [`softmax_in_place`] (the caller's `scores` are updated to the normalized
/// nodes). Then every output contributes
/// `-[label * log(score) + (1 - label) * log(1 - score)]`.
/// The sum is divided by the number of records. If
/// `param.regularization > 0`, [`l2_penalty`] is added.
///
/// Scores outside `(0, 1)` give a non-finite loss; this is not an error.
///
/// # Errors
/// * `EmptyBatch` if there are no records.
/// * `BatchSizeMismatch` if `labels` and `scores` differ in record count.
/// * `DimensionMismatch` if a record's labels and scores differ in length.
pub fn cross_entropy_loss<M: Module + ?Sized>(
    graph: &mut Graph,
    network: &M,
    labels: &[Vec<NodeId>],
    scores: &mut [Vec<NodeId>],
    param: &TrainingParam,
) -> Result<NodeId, GradNetError> {
    if scores.is_empty() {
        return Err(GradNetError::EmptyBatch {
            operation: "cross_entropy_loss".to_string(),
        });
    }
    if labels.len() != scores.len() {
        return Err(GradNetError::BatchSizeMismatch {
            inputs: scores.len(),
            labels: labels.len(),
        });
    }

    let mut loss = graph.leaf(0.0);
    for (record_labels, record_scores) in labels.iter().zip(scores.iter_mut()) {
        if record_labels.len() != record_scores.len() {
            return Err(GradNetError::DimensionMismatch {
                expected: record_scores.len(),
                actual: record_labels.len(),
                operation: "cross_entropy_loss".to_string(),
            });
        }
        softmax_in_place(graph, record_scores);
        for (&label, &score) in record_labels.iter().zip(record_scores.iter()) {
            let log_score = graph.log(score);
            let positive = graph.mul(label, log_score);

            let one = graph.leaf(1.0);
            let not_label = graph.sub(one, label);
            let one = graph.leaf(1.0);
            let not_score = graph.sub(one, score);
            let log_not_score = graph.log(not_score);
            let negative = graph.mul(not_label, log_not_score);

            let term = graph.add(positive, negative);
            loss = graph.sub(loss, term);
        }
    }
    let batch_size = graph.leaf(scores.len() as f64);
    loss = graph.div(loss, batch_size);

    if param.regularization > 0.0 {
        let penalty = l2_penalty(graph, network, param.regularization);
        loss = graph.add(loss, penalty);
    }
    Ok(loss)
}

#[cfg(test)]
#[path = "cross_entropy_test.rs"]
mod tests;
