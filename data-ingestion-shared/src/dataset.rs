//! The ordered, immutable sequence of records loaded for one import run.

use std::ops::RangeFrom;

use crate::Record;

/// An ordered sequence of records.
///
/// Loaded once and never mutated while an import is running.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportDataSet {
    records: Vec<Record>,
}

impl ImportDataSet {
    /// Create a data set from records in source order.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records in the data set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the data set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// A new data set holding the records from `range.start` onwards.
    ///
    /// Returns `None` if the start lies past the end of the data set.
    pub fn slice(&self, range: RangeFrom<usize>) -> Option<Self> {
        self.records.get(range).map(|records| Self::new(records.to_vec()))
    }
}

impl From<Vec<Record>> for ImportDataSet {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dataset_preserves_order() {
        let dataset = ImportDataSet::from(vec![json!("a"), json!("b"), json!("c")]);

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.get(0), Some(&json!("a")));
        assert_eq!(dataset.get(2), Some(&json!("c")));
        assert_eq!(dataset.get(3), None);
    }

    #[test]
    fn test_slice_from_offset() {
        let dataset = ImportDataSet::from(vec![json!(1), json!(2), json!(3)]);

        let tail = dataset.slice(1..).unwrap();
        assert_eq!(tail.records(), &[json!(2), json!(3)]);

        assert!(dataset.slice(3..).unwrap().is_empty());
        assert!(dataset.slice(4..).is_none());
    }
}
