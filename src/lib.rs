//! Per-column mean and 95% confidence interval over CSV input.
//!
//! The first row names the columns, every following row holds one
//! floating-point value per column. [`data::loader::reduce`] reads the whole
//! input and writes `<label> <mean> <ci>` for each column in header order.

pub mod config;
pub mod data;
pub mod error;
pub mod stats;

pub use config::ReducerConfig;
pub use error::ReduceError;
