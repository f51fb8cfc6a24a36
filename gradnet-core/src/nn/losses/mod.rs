pub mod cross_entropy;
