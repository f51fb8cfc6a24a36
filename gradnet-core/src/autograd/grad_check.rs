use super::graph::{Graph, NodeId};
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical} != numerical grad {numerical}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Gradient is NaN or infinite for input {input_index}. Analytical: {analytical}, numerical: {numerical}")]
    NonFiniteGradient {
        input_index: usize,
        analytical: f64,
        numerical: f64,
    },
}

/// Checks the gradients computed by [`Graph::backward`] against central finite
/// differences.
///
/// `func` builds a scalar expression from the leaves it receives, which are
/// created from `inputs` in order. For each input `i` the numerical gradient is
/// `(f(x + eps e_i) - f(x - eps e_i)) / (2 eps)`; it must agree with the
/// analytical gradient within `tolerance` (absolute or relative).
///
/// # Arguments
/// * `func` - Builds the expression and returns its output node.
/// * `inputs` - Point at which the gradients are evaluated.
/// * `epsilon` - Perturbation used for the finite difference.
/// * `tolerance` - Accepted disagreement.
pub fn check_gradients<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> NodeId,
{
    let mut graph = Graph::new();
    let start = graph.mark();
    let leaves = graph.leaves(inputs);
    let output = func(&mut graph, &leaves);
    graph.backward(output);
    let analytical = graph.grads(&leaves);

    graph.rewind(start);
    let mut perturbed = inputs.to_vec();

    for (input_index, &analytical) in analytical.iter().enumerate() {
        let original = perturbed[input_index];

        perturbed[input_index] = original + epsilon;
        let loss_plus = evaluate(&mut graph, &func, &perturbed);
        perturbed[input_index] = original - epsilon;
        let loss_minus = evaluate(&mut graph, &func, &perturbed);
        perturbed[input_index] = original;

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !analytical.is_finite() || !numerical.is_finite() {
            return Err(GradCheckError::NonFiniteGradient {
                input_index,
                analytical,
                numerical,
            });
        }
        if !relative_eq!(
            analytical,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical,
                numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }
    Ok(())
}

/// Forward value of `func` at `inputs`, leaving `graph` as it found it.
fn evaluate<F>(graph: &mut Graph, func: &F, inputs: &[f64]) -> f64
where
    F: Fn(&mut Graph, &[NodeId]) -> NodeId,
{
    let mark = graph.mark();
    let leaves = graph.leaves(inputs);
    let output = func(graph, &leaves);
    let value = graph.value(output);
    graph.rewind(mark);
    value
}
