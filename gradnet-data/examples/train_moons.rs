// gradnet-data/examples/train_moons.rs
//
// Trains a 2-10-10-1 network on a noisy two-moons set and reports the final
// loss and training accuracy. Run with `RUST_LOG=debug` to see every epoch.

use gradnet_core::{accuracy, train, Activation, GradNetError, Graph, Initializer, LayerParam, NeuralNetwork, TrainingParam};
use gradnet_data::{make_moons, Batch, RandomSampler, RecordDataset};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DATASET_SIZE: usize = 200;
const BATCH_SIZE: usize = 100;
const NOISE: f64 = 0.1;

fn main() -> Result<(), GradNetError> {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(42);

    // --- Data ---
    let dataset = RecordDataset::new(make_moons(DATASET_SIZE, NOISE, &mut rng)?);
    let sampler = RandomSampler::new(false, Some(BATCH_SIZE));
    let batch = Batch::sample(&dataset, &sampler, &mut rng)?;
    println!("Sampled {} of {} records", batch.len(), dataset.records().len());

    // --- Model ---
    let mut graph = Graph::new();
    let layers = [
        LayerParam::new(10, Some(Activation::Tanh)),
        LayerParam::new(10, Some(Activation::Tanh)),
        LayerParam::new(1, Some(Activation::Sigmoid)),
    ];
    let network = NeuralNetwork::new(&mut graph, 2, &layers, &Initializer::default(), &mut rng)?;

    // --- Training ---
    let param = TrainingParam::default();
    let report = train(&mut graph, &network, &batch.inputs, &batch.labels, &param)?;
    let accuracy = accuracy(&report.scores, &batch.labels, param.classification_threshold)?;

    let final_loss = report.final_loss().unwrap_or(f64::NAN);
    println!("Loss: {:.4}, Accuracy: {:.0}%", final_loss, 100.0 * accuracy);
    Ok(())
}
