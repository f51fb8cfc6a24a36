use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fixed_layer(graph: &mut Graph, activation: Option<Activation>) -> Layer {
    let neurons = vec![
        Neuron::from_values(graph, 0.0, &[1.0, -1.0]),
        Neuron::from_values(graph, -3.0, &[0.5, 0.5]),
        Neuron::from_values(graph, 1.0, &[0.0, 2.0]),
    ];
    Layer::from_neurons(2, neurons, activation).unwrap()
}

#[test]
fn test_layer_forward_without_activation() {
    let mut graph = Graph::new();
    let layer = fixed_layer(&mut graph, None);
    let inputs = graph.leaves(&[2.0, 1.0]);
    let out = layer.forward(&mut graph, &inputs).unwrap();
    assert_eq!(graph.values(&out), vec![1.0, -1.5, 3.0]);
}

#[test]
fn test_layer_forward_applies_activation_to_every_output() {
    let mut graph = Graph::new();
    let layer = fixed_layer(&mut graph, Some(Activation::Relu));
    let inputs = graph.leaves(&[2.0, 1.0]);
    let out = layer.forward(&mut graph, &inputs).unwrap();
    assert_eq!(graph.values(&out), vec![1.0, 0.0, 3.0]);

    let layer = fixed_layer(&mut graph, Some(Activation::Tanh));
    let out = layer.forward(&mut graph, &inputs).unwrap();
    assert_relative_eq!(graph.value(out[1]), (-1.5_f64).tanh());
}

#[test]
fn test_layer_new_sizes() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(5);
    let param = LayerParam::new(4, Some(Activation::Sigmoid));
    let layer = Layer::new(&mut graph, 3, &param, &Initializer::default(), &mut rng).unwrap();

    assert_eq!(layer.input_size(), 3);
    assert_eq!(layer.output_size(), 4);
    assert_eq!(layer.activation(), Some(Activation::Sigmoid));
    assert_eq!(layer.num_parameters(), 16);
    assert_eq!(graph.len(), 16);
}

#[test]
fn test_layer_forward_dimension_mismatch() {
    let mut graph = Graph::new();
    let layer = fixed_layer(&mut graph, None);
    let inputs = graph.leaves(&[1.0, 2.0, 3.0]);
    assert!(matches!(
        layer.forward(&mut graph, &inputs),
        Err(GradNetError::DimensionMismatch {
            expected: 2,
            actual: 3,
            ..
        })
    ));
}

#[test]
fn test_from_neurons_rejects_inconsistent_inputs() {
    let mut graph = Graph::new();
    let neurons = vec![
        Neuron::from_values(&mut graph, 0.0, &[1.0, 1.0]),
        Neuron::from_values(&mut graph, 0.0, &[1.0]),
    ];
    let err = Layer::from_neurons(2, neurons, None).unwrap_err();
    assert!(matches!(
        err,
        GradNetError::DimensionMismatch {
            expected: 2,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn test_layer_named_parameters() {
    let mut graph = Graph::new();
    let layer = fixed_layer(&mut graph, None);
    let named = layer.named_parameters();
    assert_eq!(named.len(), 9);
    assert_eq!(named[0].0, "neuron.0.intercept");
    assert_eq!(named[4].0, "neuron.1.weight.0");
    assert_eq!(named[4].1, layer.neurons()[1].weights()[0]);
}
