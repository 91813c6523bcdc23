//! Data layer: column model and the stdin reducer.
//!
//! Architecture:
//! ```text
//!   header,row,row,...  (CSV text)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  Reducer: header → columns, rows → values
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Dataset  │  Vec<Column>, row count
//!   └──────────┘
//!        │
//!        ▼
//!   stats::write_summaries → "<label> <mean> <ci95>"
//! ```

pub mod loader;
pub mod model;
