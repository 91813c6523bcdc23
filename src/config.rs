//! Reducer configuration

/// Z-score for a two-sided 95% normal-approximation interval.
pub const Z_95: f64 = 1.96;

/// Parameters of a reduction run.
#[derive(Debug, Clone)]
pub struct ReducerConfig {
    /// Field separator byte (default: `,`)
    pub delimiter: u8,

    /// Multiplier applied to the standard error (default: 1.96)
    pub z_score: f64,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            z_score: Z_95,
        }
    }
}
