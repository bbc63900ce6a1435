use once_cell::sync::Lazy;
use regex::Regex;

use super::lexicon::{lexicon, Lexicon};

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());
static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?。]+").unwrap());

/// Shortest token kept, in characters.
pub const MIN_TOKEN_CHARS: usize = 2;
/// Longest unigram kept, in characters.
pub const MAX_TOKEN_CHARS: usize = 15;

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// Splits Korean survey answers into cleaned unigrams and adjacent-word bigrams.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    lexicon: &'static Lexicon,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self { lexicon: lexicon() }
    }

    /// Tokenize one cell of free text.
    ///
    /// Per segment, every surviving unigram is emitted in order, followed by
    /// the bigrams of adjacent words when the segment kept at least two
    /// unigrams. Bigram members are cleaned from the raw words again, so a
    /// word rejected as a unigram can still pair up if it cleans to a valid
    /// non-stopword.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for sentence in split_sentences(text) {
            let words: Vec<&str> = sentence.split_whitespace().collect();

            let unigrams: Vec<String> = words
                .iter()
                .filter_map(|word| self.clean_word(word))
                .filter(|token| self.is_kept_unigram(token))
                .collect();

            let enough_for_bigrams = unigrams.len() >= 2;
            tokens.extend(unigrams);

            if enough_for_bigrams {
                tokens.extend(self.bigrams(&words));
            }
        }

        tokens
    }

    /// Strip one particle, then one meaningless ending, and validate what is
    /// left. Returns `None` when nothing meaningful survives.
    pub fn clean_word(&self, word: &str) -> Option<String> {
        let mut cleaned = word;

        for particle in self.lexicon.particles {
            if let Some(stem) = cleaned.strip_suffix(particle) {
                if char_len(stem) >= MIN_TOKEN_CHARS {
                    cleaned = stem;
                    break;
                }
            }
        }

        for ending in self.lexicon.endings {
            if let Some(stem) = cleaned.strip_suffix(ending) {
                if char_len(stem) >= MIN_TOKEN_CHARS {
                    cleaned = stem;
                    break;
                }
                return None;
            }
        }

        if char_len(cleaned) < MIN_TOKEN_CHARS || is_bare_jamo(cleaned) {
            return None;
        }
        Some(cleaned.to_string())
    }

    fn is_kept_unigram(&self, token: &str) -> bool {
        let len = char_len(token);
        (MIN_TOKEN_CHARS..=MAX_TOKEN_CHARS).contains(&len)
            && !self.lexicon.is_stopword(token)
            && !token.chars().all(|c| c.is_ascii_digit())
            && !is_bare_jamo(token)
    }

    fn is_bigram_member(&self, token: &str) -> bool {
        (MIN_TOKEN_CHARS..=MAX_TOKEN_CHARS).contains(&char_len(token))
            && !self.lexicon.is_stopword(token)
    }

    fn bigrams(&self, words: &[&str]) -> Vec<String> {
        words
            .windows(2)
            .filter_map(|pair| {
                let first = self.clean_word(pair[0])?;
                let second = self.clean_word(pair[1])?;
                (self.is_bigram_member(&first) && self.is_bigram_member(&second))
                    .then(|| format!("{first} {second}"))
            })
            .collect()
    }
}

/// Tokenize with the shared lexicon.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new().tokenize(text)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize the whole cell, then cut at sentence terminators.
///
/// Normalizing lowercases, drops links and e-mail addresses, keeps only
/// Hangul, ASCII letters and whitespace, and collapses whitespace. The
/// terminators are gone by the time the cut runs, so a cell normally comes
/// back as a single segment and `좋았어요.실습` reads as one word.
pub fn split_sentences(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    SENTENCE_END_RE
        .split(&normalized)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_urls = URL_RE.replace_all(&lowered, "");
    let without_links = EMAIL_RE.replace_all(&without_urls, "");
    let kept: String = without_links.chars().filter(|&c| is_kept_char(c)).collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_kept_char(c: char) -> bool {
    matches!(c,
        '\u{AC00}'..='\u{D7AF}'   // syllables
        | '\u{1100}'..='\u{11FF}' // conjoining jamo
        | '\u{3130}'..='\u{318F}' // compatibility jamo
    ) || c.is_ascii_alphabetic()
        || c.is_whitespace()
}

/// Only isolated consonant/vowel jamo (ㅋㅋ, ㅠㅠ, ㅇㅇ, ...), no syllables.
fn is_bare_jamo(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| matches!(c, 'ㄱ'..='ㅎ' | 'ㅏ'..='ㅣ'))
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_polite_ending_collapses_to_stopword() {
        // "습니다" leaves "좋았", which is a stopword.
        assert!(tokenize("좋았습니다").is_empty());
    }

    #[test]
    fn test_unigrams_then_bigrams() {
        let tokens = tokenize("강의가 정말 좋았어요");
        assert_eq!(
            tokens,
            vec!["강의", "정말", "좋았어요", "강의 정말", "정말 좋았어요"]
        );
    }

    #[test]
    fn test_punctuation_is_stripped_before_splitting() {
        assert_eq!(
            tokenize("강의 좋았어요.실습 부족"),
            vec!["강의", "좋았어요실습", "부족", "강의 좋았어요실습", "좋았어요실습 부족"]
        );
        // Bigrams run across former sentence ends.
        assert_eq!(
            tokenize("강의 좋았어요. 실습 부족!"),
            vec![
                "강의",
                "좋았어요",
                "실습",
                "부족",
                "강의 좋았어요",
                "좋았어요 실습",
                "실습 부족"
            ]
        );
        assert_eq!(split_sentences("강의 좋았어요. 실습 부족!"), vec!["강의 좋았어요 실습 부족"]);
    }

    #[test]
    fn test_collapsed_word_breaks_bigram_chain() {
        // "해주" cleans to nothing, so neither neighbour pairs across it.
        assert_eq!(tokenize("강의 해주 실습"), vec!["강의", "실습"]);
    }

    #[test]
    fn test_stopword_between_kept_words() {
        assert_eq!(tokenize("강의 그리고 실습"), vec!["강의", "실습"]);
    }

    #[test]
    fn test_links_and_symbols_removed() {
        let tokens = tokenize("자료 https://example.com/a 공유 부탁 test@mail.com #1");
        assert_eq!(tokens, vec!["자료", "공유", "부탁", "자료 공유", "공유 부탁"]);
    }

    #[test]
    fn test_jamo_runs_dropped_and_single_unigram_has_no_bigram() {
        assert_eq!(tokenize("ㅋㅋㅋㅋ 최고"), vec!["최고"]);
    }

    #[test]
    fn test_overlong_word_dropped() {
        assert_eq!(tokenize("abcdefghijklmnop 강의"), vec!["강의"]);
    }

    #[test]
    fn test_ascii_is_lowercased() {
        assert_eq!(
            tokenize("Great LECTURE"),
            vec!["great", "lecture", "great lecture"]
        );
    }

    #[test]
    fn test_clean_word_keeps_two_chars_minimum() {
        let t = Tokenizer::new();
        // "의" would leave a single syllable, so nothing is stripped.
        assert_eq!(t.clean_word("강의").as_deref(), Some("강의"));
        assert_eq!(t.clean_word("강의가").as_deref(), Some("강의"));
        assert_eq!(t.clean_word("실습에서").as_deref(), Some("실습"));
        // Ending with nothing meaningful before it.
        assert_eq!(t.clean_word("해주"), None);
        assert_eq!(t.clean_word("ㅠㅠ"), None);
    }

    #[test]
    fn test_token_lengths_are_bounded() {
        let text = "교육 내용이 알차고 실습이 충분해서 좋았습니다. 다만 시간이 짧아서 아쉬웠어요!";
        for token in tokenize(text) {
            for part in token.split(' ') {
                let len = part.chars().count();
                assert!((MIN_TOKEN_CHARS..=MAX_TOKEN_CHARS).contains(&len), "{token}");
            }
        }
    }
}
