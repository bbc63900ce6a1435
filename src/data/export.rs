use std::io::Write;

use crate::drilldown::{LevelMatch, WordMatch};
use crate::error::Result;

pub const WORD_EXPORT_HEADER: [&str; 3] = ["작성자", "행번호", "내용"];
pub const ROW_NUMBER_HEADER: &str = "행번호";

/// Download name for a word drill-down, e.g. `강의_상세내용.csv`.
pub fn word_export_file_name(word: &str) -> String {
    format!("{word}_상세내용.csv")
}

/// Download name for a level drill-down, e.g. `만족도_5_데이터.csv`.
pub fn level_export_file_name(column: &str, level: i64) -> String {
    format!("{column}_{level}_데이터.csv")
}

/// Write word matches as `작성자,행번호,내용`.
pub fn write_word_matches<W: Write>(out: W, matches: &[WordMatch]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(WORD_EXPORT_HEADER)?;
    for m in matches {
        let row_number = m.row_number.to_string();
        writer.write_record([m.author.as_str(), row_number.as_str(), m.text.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write level matches as `행번호` followed by every dataset column.
pub fn write_level_matches<W: Write>(out: W, matches: &[LevelMatch<'_>], columns: &[String]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    let mut header = Vec::with_capacity(columns.len() + 1);
    header.push(ROW_NUMBER_HEADER.to_string());
    header.extend(columns.iter().cloned());
    writer.write_record(&header)?;

    for m in matches {
        let mut record = Vec::with_capacity(columns.len() + 1);
        record.push(m.row_number.to_string());
        record.extend(columns.iter().map(|c| m.record.get(c).to_string()));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
