use serde::Serialize;

use super::complete_cases;
use crate::data::model::{resolve_columns, Row};

/// Fewer complete rows than this give no matrix.
pub const MIN_CORRELATION_ROWS: usize = 3;

/// Square, symmetric Pearson matrix with a unit diagonal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Coefficient between two columns by name.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.matrix[i][j])
    }
}

/// Pearson coefficient of two equally long series, clamped to `[-1, 1]`.
/// Zero variance in either, mismatched lengths or empty input give 0.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }
    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();
    let sum_y2: f64 = y.iter().map(|b| b * b).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();

    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    (numerator / denominator).clamp(-1.0, 1.0)
}

/// Correlate the selected columns over complete-case rows.
///
/// Selectors are positions into `all_columns`; out-of-range ones are dropped
/// and the rest keep their order. An empty matrix comes back when nothing
/// resolves or fewer than [`MIN_CORRELATION_ROWS`] rows are complete.
pub fn correlate<'a, I>(rows: I, selectors: &[usize], all_columns: &[String]) -> CorrelationMatrix
where
    I: IntoIterator<Item = &'a Row>,
{
    let columns = resolve_columns(selectors, all_columns);
    if columns.is_empty() {
        log::debug!("correlation skipped: no selector resolves to a column");
        return CorrelationMatrix::default();
    }

    let data = complete_cases(rows, &columns);
    let complete_rows = data.first().map_or(0, Vec::len);
    if complete_rows < MIN_CORRELATION_ROWS {
        log::debug!(
            "correlation skipped: {complete_rows} complete rows, need {MIN_CORRELATION_ROWS}"
        );
        return CorrelationMatrix::default();
    }

    let k = columns.len();
    let mut matrix = vec![vec![0.0; k]; k];
    for i in 0..k {
        matrix[i][i] = 1.0;
        for j in (i + 1)..k {
            let r = pearson(&data[i], &data[j]);
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }

    CorrelationMatrix { columns, matrix }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn rows(x: &[f64], y: &[f64]) -> Vec<Row> {
        x.iter()
            .zip(y)
            .map(|(&a, &b)| Row::from_iter([("x", CellValue::from(a)), ("y", CellValue::from(b))]))
            .collect()
    }

    fn columns() -> Vec<String> {
        vec!["x".into(), "y".into()]
    }

    #[test]
    fn test_perfect_linear() {
        let data = rows(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0]);
        let m = correlate(&data, &[0, 1], &columns());
        assert_eq!(m.columns, vec!["x", "y"]);
        assert_eq!(m.get("x", "y"), Some(1.0));
        assert_eq!(m.matrix[1][0], m.matrix[0][1]);
    }

    #[test]
    fn test_rounding_stays_within_unit_range() {
        for k in 1..=200 {
            let x: Vec<f64> = (0..40).map(|i| i as f64 * 0.1 * k as f64).collect();
            let y: Vec<f64> = x.iter().map(|v| 3.3 * v + 0.7).collect();
            let r = pearson(&x, &y);
            assert!(r <= 1.0, "k={k} r={r}");
            assert!(r > 1.0 - 1e-9, "k={k} r={r}");

            let neg: Vec<f64> = x.iter().map(|v| -3.3 * v + 0.7).collect();
            assert!(pearson(&x, &neg) >= -1.0);
        }
    }

    #[test]
    fn test_constant_column_is_zero() {
        let data = rows(&[1.0, 2.0, 3.0], &[7.0, 7.0, 7.0]);
        let m = correlate(&data, &[0, 1], &columns());
        assert_eq!(m.matrix, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn test_two_rows_is_empty() {
        let data = rows(&[1.0, 2.0], &[3.0, 4.0]);
        assert!(correlate(&data, &[0, 1], &columns()).is_empty());
    }

    #[test]
    fn test_incomplete_rows_skipped() {
        let mut data = rows(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]);
        data.push(Row::from_iter([("x", CellValue::from(9.0)), ("y", CellValue::from("없음"))]));
        let m = correlate(&data, &[1, 0], &columns());
        assert_eq!(m.columns, vec!["y", "x"]);
        assert!((m.matrix[0][1] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_selectors() {
        let data = rows(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]);
        assert!(correlate(&data, &[5, 9], &columns()).is_empty());
        let m = correlate(&data, &[0, 9], &columns());
        assert_eq!(m.matrix, vec![vec![1.0]]);
    }
}
