/// Settings of one training run.
///
/// Values are used as given; nothing is validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingParam {
    /// Number of full-batch gradient steps.
    pub epochs: usize,
    /// L2 coefficient. `0.0` disables the penalty.
    pub regularization: f64,
    /// Cut-off used to turn scores and labels into classes.
    pub classification_threshold: f64,
    pub learning_rate: f64,
}

impl Default for TrainingParam {
    fn default() -> Self {
        TrainingParam {
            epochs: 100,
            regularization: 0.0,
            classification_threshold: 0.5,
            learning_rate: 0.9,
        }
    }
}
