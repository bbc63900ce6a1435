use serde::Serialize;

use super::complete_cases;
use crate::data::model::{resolve_columns, Row};

/// Inputs for a histogram with a fitted normal curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSummary {
    pub column_name: String,
    pub values: Vec<f64>,
    pub mean: f64,
    /// Population standard deviation (divisor `n`).
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl DistributionSummary {
    /// Summarize finite values; `None` below two of them or when any
    /// statistic overflows.
    pub fn from_values(column_name: &str, values: Vec<f64>) -> Option<Self> {
        let values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        if values.len() < 2 {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if ![mean, std, min, max].iter().all(|v| v.is_finite()) {
            log::warn!("distribution for {column_name} dropped: non-finite statistics");
            return None;
        }

        Some(DistributionSummary {
            column_name: column_name.to_string(),
            values,
            mean,
            std,
            min,
            max,
        })
    }
}

/// One summary per resolvable selector, over the rows complete in every
/// selected column.
pub fn distributions<'a, I>(rows: I, selectors: &[usize], all_columns: &[String]) -> Vec<DistributionSummary>
where
    I: IntoIterator<Item = &'a Row>,
{
    let columns = resolve_columns(selectors, all_columns);
    if columns.is_empty() {
        return Vec::new();
    }

    complete_cases(rows, &columns)
        .into_iter()
        .zip(&columns)
        .filter_map(|(values, column)| DistributionSummary::from_values(column, values))
        .collect()
}
