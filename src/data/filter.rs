use std::borrow::Cow;

use serde::Serialize;

use super::model::{CellValue, Dataset, Row};
use crate::stats::numeric::DerivedStats;
use crate::stats::round_half_up;
use crate::stats::satisfaction::score_satisfaction;

// ---------------------------------------------------------------------------
// Search filter: free-text match over one column or all of them
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    AllColumns,
    Column(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter {
    pub term: String,
    pub scope: SearchScope,
}

impl SearchFilter {
    pub fn new(term: impl Into<String>, scope: SearchScope) -> Self {
        Self {
            term: term.into(),
            scope,
        }
    }

    /// A blank term filters nothing.
    pub fn is_active(&self) -> bool {
        !self.term.trim().is_empty()
    }

    /// Case-insensitive substring match of the trimmed term.
    pub fn matches(&self, row: &Row, column_names: &[String]) -> bool {
        let needle = self.term.trim().to_lowercase();
        let hit = |cell: &CellValue| cell.to_string().to_lowercase().contains(&needle);
        match &self.scope {
            SearchScope::AllColumns => column_names.iter().any(|col| hit(row.get(col))),
            SearchScope::Column(col) => hit(row.get(col)),
        }
    }
}

// ---------------------------------------------------------------------------
// Statistic filter: keep rows whose value satisfies a threshold predicate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Predicate {
    AtLeast { threshold: f64 },
    AtMost { threshold: f64 },
    Between { lower: f64, upper: f64 },
}

impl Predicate {
    pub fn test(&self, value: f64) -> bool {
        match *self {
            Predicate::AtLeast { threshold } => value >= threshold,
            Predicate::AtMost { threshold } => value <= threshold,
            Predicate::Between { lower, upper } => value >= lower && value <= upper,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatisticKind {
    TopBox,
    BottomBox,
    ConfidenceInterval,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticFilter {
    pub column: String,
    pub kind: StatisticKind,
    pub predicate: Predicate,
    pub description: String,
}

impl StatisticFilter {
    pub fn custom(column: impl Into<String>, predicate: Predicate, description: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            kind: StatisticKind::Custom,
            predicate,
            description: description.into(),
        }
    }

    /// Rows at or above the top-box threshold.
    pub fn top_box(column: &str, stats: &DerivedStats) -> Self {
        let threshold = stats.top_box_threshold;
        Self {
            column: column.to_string(),
            kind: StatisticKind::TopBox,
            predicate: Predicate::AtLeast { threshold },
            description: format!("top box (>= {threshold})"),
        }
    }

    /// Rows at or below the bottom-box threshold.
    pub fn bottom_box(column: &str, stats: &DerivedStats) -> Self {
        let threshold = stats.bottom_box_threshold;
        Self {
            column: column.to_string(),
            kind: StatisticKind::BottomBox,
            predicate: Predicate::AtMost { threshold },
            description: format!("bottom box (<= {threshold})"),
        }
    }

    /// Rows inside the 95% confidence interval of the mean; `None` when the
    /// interval is undefined (fewer than two values).
    pub fn confidence_interval(column: &str, stats: &DerivedStats) -> Option<Self> {
        let ci = stats.confidence_interval?;
        Some(Self {
            column: column.to_string(),
            kind: StatisticKind::ConfidenceInterval,
            predicate: Predicate::Between {
                lower: ci.lower,
                upper: ci.upper,
            },
            description: format!("95% confidence interval ({:.2}~{:.2})", ci.lower, ci.upper),
        })
    }

    pub fn matches(&self, row: &Row, satisfaction_columns: &[String]) -> bool {
        let is_satisfaction = satisfaction_columns.contains(&self.column);
        self.predicate
            .test(filter_value(row.get(&self.column), is_satisfaction))
    }
}

/// Value a cell is judged by: the Likert score for satisfaction columns,
/// otherwise the number itself with non-numeric cells read as 0.
pub fn filter_value(cell: &CellValue, is_satisfaction: bool) -> f64 {
    if is_satisfaction {
        f64::from(score_satisfaction(cell.as_text().trim()))
    } else {
        cell.as_f64().unwrap_or(0.0)
    }
}

/// Integer level a cell falls in for drill-down: the Likert score, or the
/// half-up rounded number (0 when non-numeric).
pub fn level_value(cell: &CellValue, is_satisfaction: bool) -> i64 {
    if is_satisfaction {
        i64::from(score_satisfaction(cell.as_text().trim()))
    } else {
        cell.as_f64().map(round_half_up).unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Filter state and evaluation
// ---------------------------------------------------------------------------

/// Active filters. Search runs first, then the statistic filter.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub search: Option<SearchFilter>,
    pub statistic: Option<StatisticFilter>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.search.as_ref().map_or(true, |s| !s.is_active()) && self.statistic.is_none()
    }
}

/// Return indices of rows that pass all active filters, in dataset order.
pub fn filtered_indices(
    dataset: &Dataset,
    filters: &FilterState,
    satisfaction_columns: &[String],
) -> Vec<usize> {
    let search = filters.search.as_ref().filter(|s| s.is_active());

    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            if let Some(search) = search {
                if !search.matches(row, &dataset.column_names) {
                    return false;
                }
            }
            if let Some(stat) = &filters.statistic {
                if !stat.matches(row, satisfaction_columns) {
                    return false;
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// FilteredView
// ---------------------------------------------------------------------------

/// The dataset narrowed to the rows passing the current filters.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Cow<'a, [usize]>,
}

impl<'a> FilteredView<'a> {
    pub fn new(dataset: &'a Dataset, indices: &'a [usize]) -> Self {
        Self {
            dataset,
            indices: Cow::Borrowed(indices),
        }
    }

    /// Every row, unfiltered.
    pub fn full(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            indices: Cow::Owned((0..dataset.len()).collect()),
        }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn column_names(&self) -> &'a [String] {
        &self.dataset.column_names
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a Row> + '_ {
        let rows = &self.dataset.rows;
        self.indices.iter().map(move |&i| &rows[i])
    }

    /// Finite numbers of a column, in view order; other cells are skipped.
    pub fn numeric_values(&self, column: &str) -> Vec<f64> {
        self.rows().filter_map(|row| row.get(column).as_f64()).collect()
    }
}
