use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;

use super::model::{CellValue, Dataset, Row};
use crate::error::Error;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a survey dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with column names, one response per line
/// * `.json` – `[{ "column": value, ... }, ...]` (records-oriented)
///
/// Binary spreadsheets are converted upstream; export them to CSV first.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV file")?;
            load_csv(file)?
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            load_json(&text)?
        }
        _ => return Err(Error::UnsupportedFormat(path.to_path_buf()).into()),
    };

    log::info!(
        "Loaded {} rows with {} columns from {}",
        dataset.len(),
        dataset.column_names.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, one object per response):
///
/// ```json
/// [
///   { "이름": "홍길동", "점수": 4, "만족도": "매우 만족", "의견": "..." },
///   ...
/// ]
/// ```
///
/// Key order of the first object defines the column order.
pub fn load_json(text: &str) -> Result<Dataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut column_names: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        if i == 0 {
            column_names = obj.keys().cloned().collect();
        }

        let row: Row = obj
            .iter()
            .map(|(key, val)| (key.clone(), json_to_cell(val)))
            .collect();
        rows.push(row);
    }

    Ok(Dataset::new(column_names, rows))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Number(n) => match n.as_f64() {
            Some(f) if f.is_finite() => CellValue::Number(f),
            _ => CellValue::Text(n.to_string()),
        },
        JsonValue::Null => CellValue::Empty,
        JsonValue::Bool(b) => CellValue::Text(b.to_string()),
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, every other row is a response.
/// Cells are typed with [`CellValue::guess`]; short rows are padded with
/// empty cells so every row carries the full column set.
pub fn load_csv<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        if record.len() > headers.len() {
            bail!(
                "CSV row {row_no}: {} fields but only {} columns",
                record.len(),
                headers.len()
            );
        }

        let row: Row = headers
            .iter()
            .enumerate()
            .map(|(col_idx, name)| {
                let cell = record.get(col_idx).map(CellValue::guess).unwrap_or_default();
                (name.clone(), cell)
            })
            .collect();
        rows.push(row);
    }

    Ok(Dataset::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_types_and_padding() {
        let input = "이름,점수,의견\n가,4,좋아요\n나,,\n다,5\n";
        let ds = load_csv(input.as_bytes()).unwrap();
        assert_eq!(ds.column_names, vec!["이름", "점수", "의견"]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.rows[0].get("점수"), &CellValue::Number(4.0));
        assert_eq!(ds.rows[1].get("점수"), &CellValue::Empty);
        assert_eq!(ds.rows[2].get("의견"), &CellValue::Empty);
    }

    #[test]
    fn test_csv_rejects_extra_fields() {
        let input = "a,b\n1,2,3\n";
        assert!(load_csv(input.as_bytes()).is_err());
    }

    #[test]
    fn test_json_preserves_key_order() {
        let text = r#"[{"z": 1, "a": "x", "m": null}, {"z": 2, "a": true}]"#;
        let ds = load_json(text).unwrap();
        assert_eq!(ds.column_names, vec!["z", "a", "m"]);
        assert_eq!(ds.rows[0].get("m"), &CellValue::Empty);
        assert_eq!(ds.rows[1].get("a"), &CellValue::from("true"));
        assert_eq!(ds.rows[1].get("m"), &CellValue::Empty);
    }

    #[test]
    fn test_json_requires_array_of_objects() {
        assert!(load_json(r#"{"a": 1}"#).is_err());
        assert!(load_json(r#"[1, 2]"#).is_err());
    }
}
