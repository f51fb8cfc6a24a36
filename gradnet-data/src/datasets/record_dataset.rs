use super::traits::Dataset;
use crate::record::Record;
use gradnet_core::GradNetError;

/// In-memory collection of [`Record`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDataset {
    records: Vec<Record>,
}

impl RecordDataset {
    pub fn new(records: Vec<Record>) -> Self {
        RecordDataset { records }
    }

    /// Builds a dataset from table rows, label in the last column.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, GradNetError> {
        let records = rows
            .iter()
            .map(|row| Record::from_row(row.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RecordDataset { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl Dataset for RecordDataset {
    type Item = Record;

    /// Returns a clone of the record at `index`.
    fn get(&self, index: usize) -> Result<Record, GradNetError> {
        self.records
            .get(index)
            .cloned()
            .ok_or(GradNetError::IndexOutOfBounds {
                index,
                len: self.records.len(),
            })
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
#[path = "record_dataset_test.rs"]
mod tests;
