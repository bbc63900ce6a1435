//! Statistics over the current row set.
//!
//! ```text
//!   FilteredView ──► numeric       count/min/max/sum/avg → median, std, quartiles, boxes, CI
//!        │     └───► satisfaction  Likert labels → 1..5 distribution
//!        │     └───► distribution  complete-case mean/std/min/max → histogram
//!   full Dataset ──► correlation   complete-case Pearson matrix
//! ```

pub mod correlation;
pub mod distribution;
pub mod histogram;
pub mod numeric;
pub mod profile;
pub mod satisfaction;

pub use correlation::{correlate, pearson, CorrelationMatrix};
pub use distribution::{distributions, DistributionSummary};
pub use histogram::Histogram;
pub use numeric::{summarize, summarize_columns, DerivedStats, NumericSummary};
pub use profile::{profile, DatasetProfile};
pub use satisfaction::{score_satisfaction, summarize_satisfaction, SatisfactionSummary};

use crate::data::model::Row;

/// Nearest integer with halves rounding up (`2.5 → 3`, `-2.5 → -2`).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Values of `columns` for every row where all of them are numeric, laid out
/// column-major. Rows missing any value are skipped entirely.
pub(crate) fn complete_cases<'a, I>(rows: I, columns: &[String]) -> Vec<Vec<f64>>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut data: Vec<Vec<f64>> = vec![Vec::new(); columns.len()];

    for row in rows {
        let values: Option<Vec<f64>> = columns.iter().map(|c| row.get(c).as_f64()).collect();
        if let Some(values) = values {
            for (column, value) in data.iter_mut().zip(values) {
                column.push(value);
            }
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
    }

    #[test]
    fn test_complete_cases_skip_partial_rows() {
        let cols: Vec<String> = vec!["a".into(), "b".into()];
        let rows = vec![
            Row::from_iter([("a", CellValue::from(1.0)), ("b", CellValue::from("2"))]),
            Row::from_iter([("a", CellValue::from(3.0)), ("b", CellValue::Empty)]),
            Row::from_iter([("a", CellValue::from(5.0)), ("b", CellValue::from(6.0))]),
        ];
        let data = complete_cases(&rows, &cols);
        assert_eq!(data, vec![vec![1.0, 5.0], vec![2.0, 6.0]]);
    }
}
