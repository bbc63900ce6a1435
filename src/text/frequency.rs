use std::collections::HashMap;

use serde::Serialize;

/// Default number of words handed to the word cloud.
pub const DEFAULT_TOP_WORDS: usize = 50;

/// Bigrams are more specific than single words and get a boost.
const PHRASE_WEIGHT: f64 = 1.5;
const WORD_WEIGHT: f64 = 1.0;

/// Bigrams must occur this often to be displayed.
const PHRASE_MIN_COUNT: usize = 2;
const WORD_MIN_COUNT: usize = 1;

/// One word-cloud entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordStat {
    pub text: String,
    /// Log-scaled, phrase-weighted size.
    pub display_value: u32,
    /// Raw occurrence count.
    pub frequency: usize,
}

/// Whether a token is a bigram.
pub fn is_phrase(token: &str) -> bool {
    token.contains(' ')
}

/// Display value for a token seen `count` times, or `None` below the
/// minimum count for its kind.
///
/// `round(log2(count + 1) * 10 * weight)`; the log keeps one dominant word
/// from dwarfing the rest.
pub fn display_value(token: &str, count: usize) -> Option<u32> {
    let (min_count, weight) = if is_phrase(token) {
        (PHRASE_MIN_COUNT, PHRASE_WEIGHT)
    } else {
        (WORD_MIN_COUNT, WORD_WEIGHT)
    };
    if count < min_count {
        return None;
    }
    let scaled = ((count as f64 + 1.0).log2() * 10.0 * weight).round();
    Some(scaled as u32)
}

// ---------------------------------------------------------------------------
// FrequencyTable
// ---------------------------------------------------------------------------

/// Raw token counts in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count every token.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut table = FrequencyTable::default();
        for token in tokens {
            table.add(token.as_ref());
        }
        table
    }

    fn add(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
    }

    /// Raw count; zero for unseen tokens.
    pub fn raw(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(token, raw count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Tokens that pass the display threshold with their display values,
    /// in first-occurrence order.
    pub fn weighted(&self) -> Vec<(&str, u32)> {
        self.iter()
            .filter_map(|(token, count)| display_value(token, count).map(|v| (token, v)))
            .collect()
    }

    /// The `n` largest display values. Ties keep first-occurrence order.
    pub fn top_words(&self, n: usize) -> Vec<WordStat> {
        let mut weighted = self.weighted();
        weighted.sort_by(|a, b| b.1.cmp(&a.1));
        weighted
            .into_iter()
            .take(n)
            .map(|(text, display_value)| WordStat {
                text: text.to_string(),
                display_value,
                frequency: self.raw(text),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_and_display_value() {
        let table = FrequencyTable::from_tokens(&["강의", "강의", "강의"]);
        assert_eq!(table.raw("강의"), 3);
        // log2(4) * 10 = 20
        assert_eq!(table.weighted(), vec![("강의", 20)]);
    }

    #[test]
    fn test_single_bigram_only_in_raw_table() {
        let table = FrequencyTable::from_tokens(&["실습 부족", "실습"]);
        assert_eq!(table.raw("실습 부족"), 1);
        assert_eq!(table.weighted(), vec![("실습", 10)]);
    }

    #[test]
    fn test_bigram_weight() {
        // round(log2(3) * 10 * 1.5) = round(23.77) = 24
        assert_eq!(display_value("실습 부족", 2), Some(24));
        assert_eq!(display_value("실습", 2), Some(16));
        assert_eq!(display_value("실습 부족", 1), None);
    }

    #[test]
    fn test_top_words_orders_by_display_then_first_seen() {
        let tokens = ["가나", "다라", "다라", "마바", "가나", "사아"];
        let top = FrequencyTable::from_tokens(&tokens).top_words(3);
        let texts: Vec<&str> = top.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["가나", "다라", "마바"]);
        assert_eq!(top[0].frequency, 2);
        assert_eq!(top[2].display_value, 10);
    }

    #[test]
    fn test_unseen_token() {
        let table = FrequencyTable::from_tokens::<&str>(&[]);
        assert_eq!(table.raw("없음"), 0);
        assert!(table.top_words(DEFAULT_TOP_WORDS).is_empty());
    }
}
