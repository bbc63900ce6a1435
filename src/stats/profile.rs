use std::collections::HashSet;

use serde::Serialize;

use crate::data::model::{CellValue, Dataset};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Number,
    String,
    Empty,
}

/// Shape of a loaded dataset, one entry per column in column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetProfile {
    pub total_rows: usize,
    pub total_columns: usize,
    pub column_names: Vec<String>,
    pub column_kinds: Vec<ColumnKind>,
    pub null_counts: Vec<usize>,
    pub unique_counts: Vec<usize>,
}

pub fn profile(dataset: &Dataset) -> DatasetProfile {
    let mut column_kinds = Vec::with_capacity(dataset.column_names.len());
    let mut null_counts = Vec::with_capacity(dataset.column_names.len());
    let mut unique_counts = Vec::with_capacity(dataset.column_names.len());

    for column in &dataset.column_names {
        let cells = move || dataset.rows.iter().map(move |row| row.get(column));

        let kind = cells()
            .find(|cell| !cell.is_empty())
            .map_or(ColumnKind::Empty, |cell| match cell {
                CellValue::Number(_) => ColumnKind::Number,
                _ => ColumnKind::String,
            });
        column_kinds.push(kind);

        null_counts.push(cells().filter(|cell| cell.is_empty()).count());

        let distinct: HashSet<String> = cells()
            .filter(|cell| !cell.is_empty())
            .map(CellValue::to_string)
            .collect();
        unique_counts.push(distinct.len());
    }

    DatasetProfile {
        total_rows: dataset.len(),
        total_columns: dataset.column_names.len(),
        column_names: dataset.column_names.clone(),
        column_kinds,
        null_counts,
        unique_counts,
    }
}
