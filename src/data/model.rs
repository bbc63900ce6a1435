use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a survey row
// ---------------------------------------------------------------------------

/// A dynamically-typed cell as handed over by the spreadsheet parser.
/// Missing cells are `Empty`, never absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    #[default]
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Number(v as f64)
    }
}

impl CellValue {
    /// Guess the type of a raw text cell: blank → `Empty`, finite number →
    /// `Number`, anything else stays text.
    pub fn guess(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return CellValue::Empty;
        }
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => CellValue::Number(v),
            _ => CellValue::Text(raw.to_string()),
        }
    }

    /// Whether the cell holds nothing (empty or whitespace-only text counts).
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Interpret the cell as a finite number. Text is trimmed and parsed;
    /// blank, non-numeric and non-finite cells yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) if v.is_finite() => Some(*v),
            CellValue::Text(s) if !s.trim().is_empty() => {
                s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
            }
            _ => None,
        }
    }

    /// Text content for text analysis and label lookups.
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

// ---------------------------------------------------------------------------
// Row – one survey response
// ---------------------------------------------------------------------------

/// A single response: column name → cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<String, CellValue>,
}

static EMPTY_CELL: CellValue = CellValue::Empty;

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell, replacing any previous value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Look up a cell. Columns the row does not carry read as `Empty`.
    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }

    pub fn cells(&self) -> impl Iterator<Item = (&String, &CellValue)> {
        self.cells.iter()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded survey
// ---------------------------------------------------------------------------

/// All responses plus the ordered column list.
///
/// The column order comes from the first record and never changes for the
/// lifetime of the dataset; positional column selectors resolve against it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All rows, in file order.
    pub rows: Vec<Row>,
    /// Ordered column names.
    pub column_names: Vec<String>,
}

impl Dataset {
    /// Build a dataset from rows whose column order is already known.
    pub fn new(column_names: Vec<String>, rows: Vec<Row>) -> Self {
        Dataset { rows, column_names }
    }

    /// Build a dataset from ordered records. The first record's keys define
    /// the column set; cells missing from later records read as empty.
    pub fn from_records(records: Vec<Vec<(String, CellValue)>>) -> Self {
        let column_names: Vec<String> = records
            .first()
            .map(|rec| rec.iter().map(|(k, _)| k.clone()).collect())
            .unwrap_or_default();

        let rows = records
            .into_iter()
            .map(|rec| rec.into_iter().collect::<Row>())
            .collect();

        Dataset { rows, column_names }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column name at a position, if in range.
    pub fn column_at(&self, index: usize) -> Option<&str> {
        self.column_names.get(index).map(String::as_str)
    }

    /// Resolve positional selectors to names, dropping out-of-range indices
    /// and keeping selector order.
    pub fn resolve_columns(&self, selectors: &[usize]) -> Vec<String> {
        resolve_columns(selectors, &self.column_names)
    }
}

/// Resolve positional selectors against an ordered column list, dropping
/// out-of-range indices.
pub fn resolve_columns(selectors: &[usize], columns: &[String]) -> Vec<String> {
    selectors
        .iter()
        .filter_map(|&idx| columns.get(idx).cloned())
        .collect()
}
