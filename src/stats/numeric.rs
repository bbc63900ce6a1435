use std::collections::BTreeMap;

use serde::Serialize;

use super::round_half_up;
use crate::data::filter::FilteredView;

/// z for a two-sided 95% interval.
const Z_95: f64 = 1.96;
/// Share of the observed range counted as top/bottom box.
const BOX_SHARE: f64 = 0.2;
/// Highest `ceil(max)` for which every level down to 1 is listed, empty
/// ones included. Above it only observed levels are.
pub const MAX_DENSE_LEVEL: i64 = 100;

/// Basic aggregates of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub column: String,
    pub average: f64,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    /// Values in row order, kept for drill-down by position.
    pub values: Vec<f64>,
}

/// Summarize already-coerced finite values. `None` for an empty slice.
pub fn summarize(column: &str, values: Vec<f64>) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(NumericSummary {
        column: column.to_string(),
        average: sum / values.len() as f64,
        count: values.len(),
        min,
        max,
        sum,
        values,
    })
}

/// One summary per column holding at least one numeric cell, in column order.
pub fn summarize_columns(view: &FilteredView<'_>) -> Vec<NumericSummary> {
    view.column_names()
        .iter()
        .filter_map(|column| summarize(column, view.numeric_values(column)))
        .collect()
}

// ---------------------------------------------------------------------------
// Derived statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    pub margin: f64,
}

/// Spread and box statistics computed from a [`NumericSummary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub median: f64,
    /// Sample standard deviation (divisor `n - 1`); `None` below two values.
    pub std_dev: Option<f64>,
    pub q1: f64,
    pub q3: f64,
    pub top_box_threshold: f64,
    pub bottom_box_threshold: f64,
    pub top_box_percent: f64,
    pub bottom_box_percent: f64,
    /// z-interval of the mean; `None` when the std is undefined.
    pub confidence_interval: Option<ConfidenceInterval>,
}

/// Count of values at one integer level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelCount {
    pub level: i64,
    pub count: usize,
}

impl NumericSummary {
    /// `None` when `values` is empty.
    pub fn derived(&self) -> Option<DerivedStats> {
        let n = self.values.len();
        if n == 0 {
            return None;
        }
        let mut sorted = self.values.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        // nearest rank, no interpolation
        let q1 = sorted[((n - 1) as f64 * 0.25).floor() as usize];
        let q3 = sorted[((n - 1) as f64 * 0.75).floor() as usize];

        let std_dev = (n >= 2).then(|| {
            let ss: f64 = self.values.iter().map(|v| (v - self.average).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        });

        let range = self.max - self.min;
        let top_box_threshold = self.max - (range * BOX_SHARE).floor();
        let bottom_box_threshold = self.min + (range * BOX_SHARE).ceil() - 1.0;
        let share = |hits: usize| hits as f64 / n as f64 * 100.0;
        let top_box_percent = share(self.values.iter().filter(|&&v| v >= top_box_threshold).count());
        let bottom_box_percent =
            share(self.values.iter().filter(|&&v| v <= bottom_box_threshold).count());

        let confidence_interval = std_dev.map(|std| {
            let margin = Z_95 * std / (n as f64).sqrt();
            ConfidenceInterval {
                lower: self.average - margin,
                upper: self.average + margin,
                margin,
            }
        });

        Some(DerivedStats {
            median,
            std_dev,
            q1,
            q3,
            top_box_threshold,
            bottom_box_threshold,
            top_box_percent,
            bottom_box_percent,
            confidence_interval,
        })
    }

    /// Counts per integer level, highest first, matching values by their
    /// half-up rounded level. Levels below 1 are not reported.
    ///
    /// Up to [`MAX_DENSE_LEVEL`] the ladder runs from `ceil(max)` down to 1
    /// with empty levels at 0. Wider columns (IDs, phone numbers) list only
    /// the levels that occur.
    pub fn level_distribution(&self) -> Vec<LevelCount> {
        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for &v in &self.values {
            let level = round_half_up(v);
            if level >= 1 {
                *counts.entry(level).or_insert(0) += 1;
            }
        }

        if self.max <= MAX_DENSE_LEVEL as f64 {
            let max_level = self.max.ceil() as i64;
            (1..=max_level)
                .rev()
                .map(|level| LevelCount {
                    level,
                    count: counts.get(&level).copied().unwrap_or(0),
                })
                .collect()
        } else {
            counts
                .into_iter()
                .rev()
                .map(|(level, count)| LevelCount { level, count })
                .collect()
        }
    }
}
