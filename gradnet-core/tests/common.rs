use gradnet_core::{Activation, Graph, Initializer, LayerParam, NeuralNetwork};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Shared by several test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Network with one hidden tanh layer and a single sigmoid output.
#[allow(dead_code)]
pub fn small_classifier(graph: &mut Graph, input_size: usize, hidden: usize, seed: u64) -> NeuralNetwork {
    let params = [
        LayerParam::new(hidden, Some(Activation::Tanh)),
        LayerParam::new(1, Some(Activation::Sigmoid)),
    ];
    NeuralNetwork::new(graph, input_size, &params, &Initializer::default(), &mut seeded_rng(seed))
        .expect("Test network creation failed")
}
