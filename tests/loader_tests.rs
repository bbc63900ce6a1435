use std::fs;

use serde_json::json;
use tempfile::TempDir;

use survey_lens::data::loader::load_file;
use survey_lens::{AnalysisConfig, CellValue, ColumnRange, Error};

#[test]
fn test_load_csv_file_with_bom() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("survey.csv");
    fs::write(&path, "\u{feff}이름,점수,만족도\n김철수,4,매우 만족\n이영희, 3.5 ,\n").unwrap();

    let ds = load_file(&path).unwrap();
    assert_eq!(ds.column_names, vec!["이름", "점수", "만족도"]);
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.rows[0].get("만족도"), &CellValue::from("매우 만족"));
    assert_eq!(ds.rows[1].get("점수"), &CellValue::Number(3.5));
    assert!(ds.rows[1].get("만족도").is_empty());
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("survey.JSON");
    let records = json!([
        { "응답ID": 1, "의견": "강의 최고", "점수": 4.5 },
        { "응답ID": 2, "의견": null, "점수": 3 }
    ]);
    fs::write(&path, records.to_string()).unwrap();

    let ds = load_file(&path).unwrap();
    assert_eq!(ds.column_names, vec!["응답ID", "의견", "점수"]);
    assert_eq!(ds.rows[1].get("의견"), &CellValue::Empty);
    assert_eq!(ds.rows[1].get("점수").as_f64(), Some(3.0));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("survey.xlsx");

    let err = load_file(&path).unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::UnsupportedFormat(p)) if *p == path));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(load_file(&dir.path().join("absent.csv")).is_err());
}

#[test]
fn test_config_from_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        json!({ "satisfaction_columns": { "start": 2, "end": 4 }, "author_columns": [0] }).to_string(),
    )
    .unwrap();

    let config = AnalysisConfig::from_path(&path).unwrap();
    assert_eq!(config.satisfaction_columns, ColumnRange { start: 2, end: 4 });
    assert_eq!(config.author_columns, vec![0]);
    assert_eq!(config.text_columns, vec![22, 23, 25]);
}

#[test]
fn test_config_errors() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("nope.json");
    assert!(matches!(AnalysisConfig::from_path(&missing), Err(Error::Io(_))));

    let garbled = dir.path().join("garbled.json");
    fs::write(&garbled, "{ not json").unwrap();
    assert!(matches!(AnalysisConfig::from_path(&garbled), Err(Error::Json(_))));

    let zero = dir.path().join("zero.json");
    fs::write(&zero, r#"{ "word_cloud_size": 0 }"#).unwrap();
    assert!(matches!(AnalysisConfig::from_path(&zero), Err(Error::InvalidConfig(_))));
}
