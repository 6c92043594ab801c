use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SeriesError {
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// The state data recorded over one simulation run.
///
/// Rows are ordered by ascending recorded step; columns are the literal
/// labels carried by the state-data file. The series is never mutated after
/// construction - consumers borrow it and allocate their results.
#[derive(Debug, Clone, PartialEq)]
pub struct StateData {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl StateData {
    /// Builds a series from column labels and row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::RaggedRow`] if any row's width differs from the
    /// number of columns.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, SeriesError> {
        for (row, values) in rows.iter().enumerate() {
            if values.len() != columns.len() {
                return Err(SeriesError::RaggedRow {
                    row,
                    expected: columns.len(),
                    found: values.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The position of a column by its literal label.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// The values of one column, in row order.
    pub fn column(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[index])
    }

    pub fn value(&self, row: usize, column: usize) -> f64 {
        self.rows[row][column]
    }

    /// One row as a labeled frame.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range; callers index rows they obtained from
    /// this series.
    pub fn frame(&self, row: usize) -> Frame {
        Frame {
            entries: self
                .columns
                .iter()
                .cloned()
                .zip(self.rows[row].iter().copied())
                .collect(),
        }
    }
}

/// One labeled row of a state-data series: column label to recorded value,
/// in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    entries: Vec<(String, f64)>,
}

impl Frame {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(l, v)| (l.as_str(), *v))
    }
}

#[cfg(test)]
mod series_tests {
    use super::*;

    fn series() -> StateData {
        StateData::new(
            vec!["Step".to_string(), "Temperature (K)".to_string()],
            vec![vec![0.0, 300.1], vec![100.0, 299.8], vec![200.0, 300.4]],
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let result = StateData::new(
            vec!["Step".to_string(), "Temperature (K)".to_string()],
            vec![vec![0.0, 300.1], vec![100.0]],
        );
        assert_eq!(
            result,
            Err(SeriesError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn column_lookup_by_label() {
        let series = series();
        assert_eq!(series.column_index("Temperature (K)"), Some(1));
        assert_eq!(series.column_index("Density (g/mL)"), None);
        let temps: Vec<f64> = series.column(1).collect();
        assert_eq!(temps, vec![300.1, 299.8, 300.4]);
    }

    #[test]
    fn frame_preserves_column_order_and_labels() {
        let frame = series().frame(1);
        let entries: Vec<(&str, f64)> = frame.iter().collect();
        assert_eq!(
            entries,
            vec![("Step", 100.0), ("Temperature (K)", 299.8)]
        );
        assert_eq!(frame.get("Step"), Some(100.0));
        assert_eq!(frame.get("Mass"), None);
    }
}
