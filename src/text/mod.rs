//! Free-text layer: Korean tokenization, word frequencies and sentiment.
//!
//! ```text
//!   cell text
//!       │
//!       ▼
//!   ┌───────────┐
//!   │ tokenizer │  normalize → sentences → cleaned unigrams + bigrams
//!   └───────────┘
//!       │
//!       ├──────────────┐
//!       ▼              ▼
//!   ┌───────────┐  ┌────────────┐
//!   │ frequency │  │ classifier │  lexicon containment → category scores
//!   └───────────┘  └────────────┘
//!       │              │
//!       └──────┬───────┘
//!              ▼
//!        ┌──────────┐
//!        │ analysis │  per-column word cloud, ratios, keywords
//!        └──────────┘
//! ```

pub mod analysis;
pub mod classifier;
pub mod frequency;
pub mod lexicon;
pub mod tokenizer;

pub use analysis::{analyze_columns, TextAnalysis, TextAnalysisLimits};
pub use classifier::{classify, top_keywords, Category, Classification, Keyword};
pub use frequency::{FrequencyTable, WordStat};
pub use tokenizer::{tokenize, Tokenizer};
