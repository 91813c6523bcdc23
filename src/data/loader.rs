use std::io::{BufRead, Write};

use super::model::Dataset;
use crate::config::ReducerConfig;
use crate::error::ReduceError;
use crate::stats;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a header line and data lines from `input`, then write one
/// `<label> <mean> <ci>` line per column to `out`.
///
/// Input layout:
/// * line 1 – column labels, whitespace around each label is stripped
/// * lines 2.. – one floating-point literal per column
///
/// Every line after the header is a data row, blank ones included. There is
/// no quoting: every delimiter splits a field. Empty input has no columns and
/// produces no output.
pub fn reduce<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: &ReducerConfig,
) -> Result<Dataset, ReduceError> {
    let mut lines = input.lines();

    let Some(header) = lines.next() else {
        log::debug!("empty input, nothing to reduce");
        return Ok(Dataset::default());
    };
    let mut reducer = Reducer::from_header(&header.map_err(ReduceError::Read)?, config.delimiter);

    for line in lines {
        reducer.ingest_row(&line.map_err(ReduceError::Read)?)?;
    }

    reducer.finalize(out, config)
}

// ---------------------------------------------------------------------------
// Reducer – header first, then rows, then one reduction pass
// ---------------------------------------------------------------------------

/// Accumulates rows into per-column series.
///
/// A `Reducer` only exists once a header has been read, so the header/row
/// phases cannot be confused.
#[derive(Debug)]
pub struct Reducer {
    dataset: Dataset,
    delimiter: char,
}

impl Reducer {
    /// Start a run from the header line: one empty column per label.
    pub fn from_header(line: &str, delimiter: u8) -> Self {
        let delimiter = char::from(delimiter);
        let dataset = Dataset::from_labels(line.split(delimiter).map(str::trim));
        log::debug!("header: {} columns {:?}", dataset.width(), dataset.labels().collect::<Vec<_>>());
        Reducer { dataset, delimiter }
    }

    /// Parse one data line and append value `i` to column `i`.
    ///
    /// Fields are parsed before the width is checked, so a blank line is an
    /// invalid (empty) number. The row is rejected as a whole and columns
    /// never end up with different lengths.
    pub fn ingest_row(&mut self, line: &str) -> Result<(), ReduceError> {
        // Header is line 1.
        let line_no = self.dataset.row_count() as u64 + 2;

        let row = line
            .split(self.delimiter)
            .enumerate()
            .map(|(i, field)| {
                let field = field.trim();
                field.parse::<f64>().map_err(|source| ReduceError::InvalidNumber {
                    line: line_no,
                    column: self
                        .dataset
                        .columns
                        .get(i)
                        .map_or_else(|| format!("#{}", i + 1), |c| c.label.clone()),
                    value: field.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let expected = self.dataset.width();
        if row.len() != expected {
            return Err(ReduceError::FieldCount {
                line: line_no,
                expected,
                found: row.len(),
            });
        }

        self.dataset.push_row(row);
        log::trace!("line {line_no}: ingested");
        Ok(())
    }

    /// Everything ingested so far.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Reduce every column and write its summary line, in header order.
    pub fn finalize<W: Write>(self, out: &mut W, config: &ReducerConfig) -> Result<Dataset, ReduceError> {
        log::info!(
            "reducing {} rows across {} columns",
            self.dataset.row_count(),
            self.dataset.width()
        );
        stats::write_summaries(&self.dataset, out, config)?;
        Ok(self.dataset)
    }
}
