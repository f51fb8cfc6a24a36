use crate::autograd::{Graph, NodeId};
use crate::error::GradNetError;
use crate::nn::losses::cross_entropy::cross_entropy_loss;
use crate::nn::{Module, NeuralNetwork};
use crate::optim::{Optimizer, Sgd};
use crate::train::param::TrainingParam;
use log::{debug, info, warn};

/// Outcome of [`train`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrainingReport {
    /// Loss value of every epoch, in order.
    pub losses: Vec<f64>,
    /// Scores of every record from the last epoch, as seen by the loss
    /// (multi-output records are softmax-normalized).
    pub scores: Vec<Vec<f64>>,
}

impl TrainingReport {
    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

/// Trains `network` with full-batch gradient descent on the cross-entropy loss.
///
/// Each epoch runs the forward pass over every record, builds the loss,
/// resets the parameter gradients, backpropagates and moves every parameter by
/// `-learning_rate * grad`. The number of epochs is fixed.
///
/// The parameters keep their trained values in `graph`. Every other node
/// created here is dropped before returning, whether training succeeds or not.
///
/// # Errors
/// * `BatchSizeMismatch` if `inputs` and `labels` differ in record count.
/// * `EmptyBatch` if there are no records.
/// * `DimensionMismatch` if a record does not fit the network.
pub fn train(
    graph: &mut Graph,
    network: &NeuralNetwork,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
    param: &TrainingParam,
) -> Result<TrainingReport, GradNetError> {
    if inputs.len() != labels.len() {
        return Err(GradNetError::BatchSizeMismatch {
            inputs: inputs.len(),
            labels: labels.len(),
        });
    }
    if inputs.is_empty() {
        return Err(GradNetError::EmptyBatch {
            operation: "train".to_string(),
        });
    }
    info!(
        "Training: {} epochs, learning rate {}, {} records, {} parameters",
        param.epochs,
        param.learning_rate,
        inputs.len(),
        network.num_parameters()
    );

    let start = graph.mark();
    let result = run_epochs(graph, network, inputs, labels, param);
    graph.rewind(start);

    if let Ok(report) = &result {
        match report.final_loss() {
            Some(loss) => info!("Training finished: final loss {:.6}", loss),
            None => info!("Training finished: no epochs run"),
        }
    }
    result
}

fn run_epochs(
    graph: &mut Graph,
    network: &NeuralNetwork,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
    param: &TrainingParam,
) -> Result<TrainingReport, GradNetError> {
    let input_nodes: Vec<Vec<NodeId>> = inputs.iter().map(|r| graph.leaves(r)).collect();
    let label_nodes: Vec<Vec<NodeId>> = labels.iter().map(|r| graph.leaves(r)).collect();
    let mut optimizer = Sgd::new(network.parameters(), param.learning_rate);

    let epoch_start = graph.mark();
    let mut report = TrainingReport {
        losses: Vec::with_capacity(param.epochs),
        scores: Vec::new(),
    };
    let mut reported_non_finite = false;

    for epoch in 0..param.epochs {
        let mut scores = network.forward_batch(graph, &input_nodes)?;
        let loss = cross_entropy_loss(graph, network, &label_nodes, &mut scores, param)?;
        let loss_value = graph.value(loss);

        optimizer.zero_grad(graph);
        graph.backward(loss);
        optimizer.step(graph);

        debug!("Epoch {}/{}: loss {}", epoch + 1, param.epochs, loss_value);
        if !loss_value.is_finite() && !reported_non_finite {
            warn!("Epoch {}: loss is {}, continuing", epoch + 1, loss_value);
            reported_non_finite = true;
        }
        report.losses.push(loss_value);

        if epoch + 1 == param.epochs {
            report.scores = scores.iter().map(|record| graph.values(record)).collect();
        }
        graph.rewind(epoch_start);
    }
    Ok(report)
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
