use super::*;
use crate::error::GradNetError;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_default_is_standard_normal() {
    assert_eq!(
        Initializer::default(),
        Initializer::Normal {
            mean: 0.0,
            std_dev: 1.0
        }
    );
}

#[test]
fn test_uniform_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let init = Initializer::Uniform {
        low: -0.5,
        high: 0.25,
    };
    let values = init.sample_n(1000, &mut rng).unwrap();
    assert_eq!(values.len(), 1000);
    assert!(values.iter().all(|&v| (-0.5..0.25).contains(&v)));
}

#[test]
fn test_normal_sample_statistics() {
    let mut rng = StdRng::seed_from_u64(11);
    let init = Initializer::Normal {
        mean: 3.0,
        std_dev: 0.5,
    };
    let values = init.sample_n(20_000, &mut rng).unwrap();
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    assert!((mean - 3.0).abs() < 0.05, "mean {}", mean);
    assert!((var.sqrt() - 0.5).abs() < 0.05, "std {}", var.sqrt());
}

#[test]
fn test_same_seed_same_values() {
    let init = Initializer::default();
    let a = init.sample_n(5, &mut StdRng::seed_from_u64(3)).unwrap();
    let b = init.sample_n(5, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_invalid_distributions() {
    let mut rng = StdRng::seed_from_u64(0);
    let bad = [
        Initializer::Normal {
            mean: 0.0,
            std_dev: -1.0,
        },
        Initializer::Normal {
            mean: f64::NAN,
            std_dev: 1.0,
        },
        Initializer::Uniform { low: 1.0, high: 1.0 },
        Initializer::Uniform {
            low: 0.0,
            high: f64::INFINITY,
        },
        Initializer::Uniform {
            low: -f64::MAX,
            high: f64::MAX,
        },
    ];
    for init in bad {
        assert!(
            matches!(init.sample(&mut rng), Err(GradNetError::InvalidDistribution(_))),
            "{:?} should be rejected",
            init
        );
    }
}

#[test]
fn test_zero_std_dev_is_constant() {
    let mut rng = StdRng::seed_from_u64(4);
    let init = Initializer::Normal {
        mean: 1.5,
        std_dev: 0.0,
    };
    assert_eq!(init.sample_n(3, &mut rng).unwrap(), vec![1.5, 1.5, 1.5]);
}
