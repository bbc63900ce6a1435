use serde::Serialize;

use super::classifier::{classify, top_keywords, Category, Keyword};
use super::frequency::{FrequencyTable, WordStat};
use super::tokenizer::Tokenizer;
use crate::data::filter::FilteredView;

/// Per-category keyword lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentKeywords {
    pub positive: Vec<Keyword>,
    pub negative: Vec<Keyword>,
    pub suggest: Vec<Keyword>,
}

/// Everything derived from one free-text column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    pub column: String,
    pub total_words: usize,
    /// Distinct tokens that pass the word-cloud threshold.
    pub unique_words: usize,
    pub positive_words: usize,
    pub negative_words: usize,
    pub suggest_words: usize,
    pub neutral_words: usize,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    pub suggest_ratio: f64,
    pub neutral_ratio: f64,
    pub word_cloud: Vec<WordStat>,
    pub sentiment_keywords: SentimentKeywords,
    /// -1 (negative) to 1 (positive).
    pub sentiment_score: f64,
}

/// Sizes of the ranked lists.
#[derive(Debug, Clone, Copy)]
pub struct TextAnalysisLimits {
    pub word_cloud_size: usize,
    pub keyword_limit: usize,
}

impl TextAnalysis {
    /// Analyze the non-blank cells of one column. `None` when every cell is
    /// blank.
    pub fn analyze<S: AsRef<str>>(
        column: &str,
        texts: &[S],
        tokenizer: &Tokenizer,
        limits: TextAnalysisLimits,
    ) -> Option<TextAnalysis> {
        let texts: Vec<&str> = texts
            .iter()
            .map(|t| t.as_ref())
            .filter(|t| !t.trim().is_empty())
            .collect();
        if texts.is_empty() {
            return None;
        }

        let tokens: Vec<String> = texts.iter().flat_map(|t| tokenizer.tokenize(t)).collect();
        let table = FrequencyTable::from_tokens(&tokens);
        let classification = classify(&tokens);

        let total_words = tokens.len();
        let ratio = |score: usize| {
            if total_words == 0 {
                0.0
            } else {
                score as f64 / total_words as f64 * 100.0
            }
        };

        Some(TextAnalysis {
            column: column.to_string(),
            total_words,
            unique_words: table.weighted().len(),
            positive_words: classification.positive_score,
            negative_words: classification.negative_score,
            suggest_words: classification.suggest_score,
            neutral_words: classification.neutral_score,
            positive_ratio: ratio(classification.positive_score),
            negative_ratio: ratio(classification.negative_score),
            suggest_ratio: ratio(classification.suggest_score),
            neutral_ratio: ratio(classification.neutral_score),
            word_cloud: table.top_words(limits.word_cloud_size),
            sentiment_keywords: SentimentKeywords {
                positive: top_keywords(&tokens, Category::Positive, limits.keyword_limit),
                negative: top_keywords(&tokens, Category::Negative, limits.keyword_limit),
                suggest: top_keywords(&tokens, Category::Suggest, limits.keyword_limit),
            },
            sentiment_score: classification.sentiment_score(),
        })
    }
}

/// Analyze each named column of the view, skipping columns without text.
pub fn analyze_columns(
    view: &FilteredView<'_>,
    columns: &[String],
    limits: TextAnalysisLimits,
) -> Vec<TextAnalysis> {
    let tokenizer = Tokenizer::new();
    columns
        .iter()
        .filter_map(|column| {
            let texts: Vec<String> = view.rows().map(|row| row.get(column).as_text()).collect();
            TextAnalysis::analyze(column, &texts, &tokenizer, limits)
        })
        .collect()
}
