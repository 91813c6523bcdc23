// ---------------------------------------------------------------------------
// Column – one named series of observations
// ---------------------------------------------------------------------------

/// A single input column: its header label and every value seen so far,
/// in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub label: String,
    pub values: Vec<f64>,
}

impl Column {
    pub fn new(label: impl Into<String>) -> Self {
        Column {
            label: label.into(),
            values: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – every column of the run
// ---------------------------------------------------------------------------

/// All columns in header order plus the number of data rows ingested.
///
/// Every column holds exactly `row_count` values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Build an empty dataset with one column per label.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dataset {
            columns: labels.into_iter().map(Column::new).collect(),
            row_count: 0,
        }
    }

    /// Append one row of already-parsed values, value `i` to column `i`.
    ///
    /// Callers check the width beforehand; a mismatched row would break the
    /// per-column length invariant.
    pub(crate) fn push_row(&mut self, row: Vec<f64>) {
        debug_assert_eq!(row.len(), self.columns.len());
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.values.push(value);
        }
        self.row_count += 1;
    }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Column labels in header order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_append_in_column_order() {
        let mut ds = Dataset::from_labels(["a", "b"]);
        ds.push_row(vec![1.0, 10.0]);
        ds.push_row(vec![2.0, 20.0]);

        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.width(), 2);
        assert_eq!(ds.columns[0].values, vec![1.0, 2.0]);
        assert_eq!(ds.columns[1].values, vec![10.0, 20.0]);
        assert_eq!(ds.labels().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn fresh_dataset_has_no_rows() {
        let ds = Dataset::from_labels(["x"]);
        assert_eq!(ds.row_count(), 0);
        assert!(ds.columns[0].values.is_empty());
    }
}
