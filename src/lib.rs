//! Survey response analysis: Korean free-text mining, Likert scoring and
//! numeric statistics over a filtered view of a tabular survey export.
//!
//! ```text
//!   loader ──► Dataset ──► AnalysisState ──► FilteredView ──┬─► stats
//!                               │                           ├─► text
//!                               │                           └─► drilldown ──► export
//!                               └──► SurveyReport
//! ```

pub mod config;
pub mod data;
pub mod drilldown;
pub mod error;
pub mod report;
pub mod state;
pub mod stats;
pub mod text;

pub use config::{AnalysisConfig, ColumnRange, ColumnRoles};
pub use data::filter::{FilteredView, Predicate, SearchScope, StatisticFilter, StatisticKind};
pub use data::model::{CellValue, Dataset, Row};
pub use error::{Error, Result};
pub use report::{NumericReport, SurveyReport};
pub use state::AnalysisState;
