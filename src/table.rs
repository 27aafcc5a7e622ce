use std::collections::HashSet;
use serde::Serialize;
use crate::periodogram::PeriodogramError;
/// Named numeric column.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}
/// Ordered set of equal-length named columns exchanged with the surrounding
/// table layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
}
impl Table {
    pub fn new(columns: Vec<(String, Vec<f64>)>) -> Result<Self, PeriodogramError> {
        let expected = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        let mut seen = HashSet::new();
        for (name, values) in &columns {
            if !seen.insert(name.as_str()) {
                return Err(PeriodogramError::DuplicateColumn { name: name.clone() });
            }
            if values.len() != expected {
                return Err(PeriodogramError::RaggedColumn {
                    name: name.clone(),
                    expected,
                    actual: values.len(),
                });
            }
        }
        Ok(Self {
            columns: columns
                .into_iter()
                .map(|(name, values)| Column { name, values })
                .collect(),
        })
    }
    pub fn column(&self, name: &str) -> Result<&[f64], PeriodogramError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| PeriodogramError::MissingColumn {
                name: name.to_string(),
            })
    }
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
    pub fn num_rows(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }
    /// Row-major view, one `Vec` per row in column order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (0..self.num_rows()).map(move |i| self.columns.iter().map(|c| c.values[i]).collect())
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::periodogram::ErrorKind;
    #[test]
    fn selects_columns_by_name() {
        let table = Table::new(vec![
            ("t".into(), vec![0.0, 1.0]),
            ("y".into(), vec![5.0, 6.0]),
        ])
        .unwrap();
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.num_columns(), 2);
        assert_eq!(table.column("y").unwrap(), &[5.0, 6.0]);
        assert_eq!(table.rows().collect::<Vec<_>>(), vec![vec![0.0, 5.0], vec![1.0, 6.0]]);
    }
    #[test]
    fn missing_column_is_malformed_input() {
        let table = Table::new(vec![("t".into(), vec![0.0])]).unwrap();
        let err = table.column("y").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert_eq!(err.to_string(), "column `y` not found");
    }
    #[test]
    fn rejects_ragged_and_duplicate_columns() {
        assert!(matches!(
            Table::new(vec![("a".into(), vec![0.0]), ("b".into(), vec![])]),
            Err(PeriodogramError::RaggedColumn { expected: 1, actual: 0, .. })
        ));
        assert!(matches!(
            Table::new(vec![("a".into(), vec![0.0]), ("a".into(), vec![1.0])]),
            Err(PeriodogramError::DuplicateColumn { .. })
        ));
    }
    #[test]
    fn serializes_to_json() {
        let table = Table::new(vec![("freq".into(), vec![0.5])]).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"columns":[{"name":"freq","values":[0.5]}]}"#);
    }
}
