//! Row-level detail behind an aggregate.
//!
//! Both lookups walk the same [`FilteredView`] the aggregates were computed
//! from, so the number of matches always agrees with what the summary showed.

use serde::Serialize;

use crate::data::filter::{level_value, FilteredView};
use crate::data::model::Row;
use crate::text::Tokenizer;

/// Separator between author fields in a word match label.
pub const AUTHOR_SEPARATOR: &str = " : ";

/// A response whose tokenized text contains the clicked word.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMatch {
    /// 1-based position within the filtered view.
    pub row_number: usize,
    pub author: String,
    pub text: String,
}

/// A full response whose value in the clicked column sits at the level.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelMatch<'a> {
    pub row_number: usize,
    pub record: &'a Row,
}

/// Rows where `word` is one of the tokens of `column`, compared exactly.
pub fn word_matches(
    view: &FilteredView<'_>,
    column: &str,
    word: &str,
    author_columns: &[String],
    tokenizer: &Tokenizer,
) -> Vec<WordMatch> {
    view.rows()
        .enumerate()
        .filter_map(|(i, row)| {
            let text = row.get(column).as_text();
            if text.trim().is_empty() {
                return None;
            }
            if !tokenizer.tokenize(&text).iter().any(|t| t == word) {
                return None;
            }
            Some(WordMatch {
                row_number: i + 1,
                author: author_label(row, author_columns),
                text: text.trim().to_string(),
            })
        })
        .collect()
}

/// Rows whose level in `column` equals `level`.
pub fn level_matches<'a>(
    view: &FilteredView<'a>,
    column: &str,
    level: i64,
    is_satisfaction: bool,
) -> Vec<LevelMatch<'a>> {
    view.rows()
        .enumerate()
        .filter(|(_, row)| level_value(row.get(column), is_satisfaction) == level)
        .map(|(i, record)| LevelMatch {
            row_number: i + 1,
            record,
        })
        .collect()
}

fn author_label(row: &Row, author_columns: &[String]) -> String {
    author_columns
        .iter()
        .map(|c| row.get(c).to_string())
        .collect::<Vec<_>>()
        .join(AUTHOR_SEPARATOR)
}
