//! Data layer: survey rows, loading, filtering and drill-down export.
//!
//! ```text
//!  .csv / .json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  parse file → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Dataset │  Vec<Row>, ordered column names
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  search + statistic filter → FilteredView
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  export  │  drill-down rows → CSV
//!   └──────────┘
//! ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
