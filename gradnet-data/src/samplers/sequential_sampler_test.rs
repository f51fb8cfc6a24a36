// gradnet-data/src/samplers/sequential_sampler_test.rs

use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_sequential_sampler_order() {
    let sampler = SequentialSampler::new();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(sampler.indices(5, &mut rng).unwrap(), vec![0, 1, 2, 3, 4]);
    assert_eq!(sampler.len(5), 5);
}

#[test]
fn test_sequential_sampler_empty() {
    let sampler = SequentialSampler::new();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(sampler.indices(0, &mut rng).unwrap().is_empty());
}
