use std::fmt;
use std::io::Write;

use crate::config::ReducerConfig;
use crate::data::model::{Column, Dataset};
use crate::error::ReduceError;

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Bessel-corrected (n - 1) standard deviation around a known mean.
pub fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    let variance =
        values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (values.len() as f64 - 1.0);
    variance.sqrt()
}

/// Mean and confidence-interval half-width of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub label: String,
    pub mean: f64,
    /// `z * sd / sqrt(n)`
    pub ci_half_width: f64,
}

/// Summarise `column` over `row_count` observations.
///
/// Fewer than two observations leave the sample standard deviation (and with
/// zero rows, the standard error) undefined, so they are rejected rather than
/// reported as NaN.
pub fn summarize(column: &Column, row_count: usize, z_score: f64) -> Result<ColumnSummary, ReduceError> {
    let observations = column.values.len();
    if observations < 2 || row_count == 0 {
        return Err(ReduceError::Degenerate {
            column: column.label.clone(),
            observations,
        });
    }

    let mean = mean(&column.values);
    let sd = sample_std_dev(&column.values, mean);
    let std_error = sd / (row_count as f64).sqrt();

    Ok(ColumnSummary {
        label: column.label.clone(),
        mean,
        ci_half_width: std_error * z_score,
    })
}

impl fmt::Display for ColumnSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.label,
            Fixed(self.mean),
            Fixed(self.ci_half_width)
        )
    }
}

/// Six fractional digits, `printf("%f")` style: non-finite values print as
/// `nan`, `inf` and `-inf`.
struct Fixed(f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str("nan")
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "inf" } else { "-inf" })
        } else {
            write!(f, "{v:.6}")
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Write one summary line per column, in header order.
///
/// Lines are emitted as each column is reduced. If a later column fails, the
/// lines already written are flushed before the error is returned.
pub fn write_summaries<W: Write>(
    dataset: &Dataset,
    out: &mut W,
    config: &ReducerConfig,
) -> Result<(), ReduceError> {
    for column in &dataset.columns {
        let summary = match summarize(column, dataset.row_count(), config.z_score) {
            Ok(summary) => summary,
            Err(e) => {
                out.flush()?;
                return Err(e);
            }
        };
        log::debug!("column '{}': mean={} ci={}", summary.label, summary.mean, summary.ci_half_width);
        writeln!(out, "{summary}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Z_95;

    fn column(label: &str, values: &[f64]) -> Column {
        Column {
            label: label.to_string(),
            values: values.to_vec(),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn mean_and_sd_of_small_series() {
        let values = [1.0, 2.0, 3.0];
        let m = mean(&values);
        assert!(close(m, 2.0));
        assert!(close(sample_std_dev(&values, m), 1.0));
    }

    #[test]
    fn ci_uses_z_times_standard_error() {
        let summary = summarize(&column("a", &[1.0, 2.0, 3.0]), 3, Z_95).unwrap();
        assert!(close(summary.mean, 2.0));
        assert!(close(summary.ci_half_width, 1.96 / 3f64.sqrt()));
        assert_eq!(summary.to_string(), "a 2.000000 1.131607");
    }

    #[test]
    fn constant_column_has_zero_width() {
        let summary = summarize(&column("c", &[5.0, 5.0, 5.0, 5.0]), 4, Z_95).unwrap();
        assert_eq!(summary.to_string(), "c 5.000000 0.000000");
    }

    #[test]
    fn single_observation_is_degenerate() {
        let err = summarize(&column("a", &[1.0]), 1, Z_95).unwrap_err();
        assert!(err.is_degenerate());
        assert!(matches!(err, ReduceError::Degenerate { observations: 1, .. }));
    }

    #[test]
    fn empty_column_is_degenerate() {
        let err = summarize(&column("a", &[]), 0, Z_95).unwrap_err();
        assert!(matches!(err, ReduceError::Degenerate { observations: 0, .. }));
    }

    #[test]
    fn non_finite_values_print_like_printf() {
        assert_eq!(Fixed(f64::NAN).to_string(), "nan");
        assert_eq!(Fixed(f64::INFINITY).to_string(), "inf");
        assert_eq!(Fixed(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Fixed(-1.5).to_string(), "-1.500000");
    }

    #[test]
    fn summaries_follow_header_order() {
        let mut ds = Dataset::from_labels(["b", "a"]);
        ds.push_row(vec![10.0, 1.0]);
        ds.push_row(vec![20.0, 2.0]);
        ds.push_row(vec![30.0, 3.0]);

        let mut out = Vec::new();
        write_summaries(&ds, &mut out, &ReducerConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let labels: Vec<&str> = text.lines().map(|l| l.split(' ').next().unwrap()).collect();
        assert_eq!(labels, vec!["b", "a"]);
        assert!(text.starts_with("b 20.000000 "));
    }

    #[test]
    fn custom_z_score_scales_interval() {
        let config = ReducerConfig {
            z_score: 1.0,
            ..ReducerConfig::default()
        };
        let summary = summarize(&column("a", &[1.0, 3.0]), 2, config.z_score).unwrap();
        // sd = sqrt(2), se = 1
        assert!(close(summary.ci_half_width, 1.0));
    }
}
