use std::collections::HashSet;

use serde::Serialize;

use super::frequency::{is_phrase, FrequencyTable};
use super::lexicon::{lexicon, Lexicon};

/// Default number of keywords listed per category.
pub const DEFAULT_KEYWORD_LIMIT: usize = 10;

/// Sentiment bucket of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Positive,
    Negative,
    Suggest,
    Neutral,
}

impl Category {
    /// Word list backing the category; `Neutral` has none.
    fn word_list(self, lex: &Lexicon) -> &'static [&'static str] {
        match self {
            Category::Positive => lex.positive,
            Category::Negative => lex.negative,
            Category::Suggest => lex.suggest,
            Category::Neutral => &[],
        }
    }
}

/// Containment in either direction: the token holds a list entry, or a list
/// entry holds the token. Short tokens over-match by nature.
pub fn matches_list(token: &str, list: &[&str]) -> bool {
    list.iter()
        .any(|entry| token.contains(entry) || entry.contains(token))
}

/// First matching category in positive → negative → suggest order.
pub fn category_of(token: &str) -> Category {
    let lex = lexicon();
    [Category::Positive, Category::Negative, Category::Suggest]
        .into_iter()
        .find(|cat| matches_list(token, cat.word_list(lex)))
        .unwrap_or(Category::Neutral)
}

fn token_weight(token: &str) -> usize {
    if is_phrase(token) {
        2
    } else {
        1
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Weighted category scores plus the distinct tokens behind each score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub positive_score: usize,
    pub negative_score: usize,
    pub suggest_score: usize,
    pub neutral_score: usize,
    pub positive_tokens: Vec<String>,
    pub negative_tokens: Vec<String>,
    pub suggest_tokens: Vec<String>,
    pub neutral_tokens: Vec<String>,
}

impl Classification {
    pub fn score(&self, category: Category) -> usize {
        match category {
            Category::Positive => self.positive_score,
            Category::Negative => self.negative_score,
            Category::Suggest => self.suggest_score,
            Category::Neutral => self.neutral_score,
        }
    }

    pub fn tokens(&self, category: Category) -> &[String] {
        match category {
            Category::Positive => &self.positive_tokens,
            Category::Negative => &self.negative_tokens,
            Category::Suggest => &self.suggest_tokens,
            Category::Neutral => &self.neutral_tokens,
        }
    }

    /// `(positive - negative) / (positive + negative)`, 0 without either.
    pub fn sentiment_score(&self) -> f64 {
        let total = self.positive_score + self.negative_score;
        if total == 0 {
            return 0.0;
        }
        (self.positive_score as f64 - self.negative_score as f64) / total as f64
    }
}

/// Assign every token to exactly one category. Bigrams weigh 2, unigrams 1.
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Classification {
    let mut result = Classification::default();
    let mut seen: HashSet<(Category, &str)> = HashSet::new();

    for token in tokens {
        let token = token.as_ref();
        let category = category_of(token);
        let weight = token_weight(token);

        let (score, found) = match category {
            Category::Positive => (&mut result.positive_score, &mut result.positive_tokens),
            Category::Negative => (&mut result.negative_score, &mut result.negative_tokens),
            Category::Suggest => (&mut result.suggest_score, &mut result.suggest_tokens),
            Category::Neutral => (&mut result.neutral_score, &mut result.neutral_tokens),
        };
        *score += weight;
        if seen.insert((category, token)) {
            found.push(token.to_string());
        }
    }

    result
}

// ---------------------------------------------------------------------------
// Keywords
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyword {
    pub word: String,
    pub frequency: usize,
}

/// Most frequent tokens matching one category's list, ignoring the priority
/// order used by [`classify`]. `Neutral` collects tokens matching no list.
pub fn top_keywords<S: AsRef<str>>(tokens: &[S], category: Category, limit: usize) -> Vec<Keyword> {
    let lex = lexicon();
    let matching: Vec<&str> = tokens
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| match category {
            Category::Neutral => category_of(t) == Category::Neutral,
            _ => matches_list(t, category.word_list(lex)),
        })
        .collect();

    let table = FrequencyTable::from_tokens(&matching);
    let mut counted: Vec<(&str, usize)> = table.iter().collect();
    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted
        .into_iter()
        .take(limit)
        .map(|(word, frequency)| Keyword {
            word: word.to_string(),
            frequency,
        })
        .collect()
}
