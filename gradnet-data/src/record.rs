use gradnet_core::GradNetError;

/// One labeled example.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub input: Vec<f64>,
    pub label: Vec<f64>,
}

impl Record {
    pub fn new(input: Vec<f64>, label: Vec<f64>) -> Self {
        Record { input, label }
    }

    /// Splits a table row: every column but the last is input, the last is
    /// the (single) label.
    ///
    /// # Errors
    /// `GradNetError::EmptyRecord` for an empty row.
    pub fn from_row(row: &[f64]) -> Result<Self, GradNetError> {
        let (&label, input) = row.split_last().ok_or(GradNetError::EmptyRecord)?;
        Ok(Record {
            input: input.to_vec(),
            label: vec![label],
        })
    }
}
