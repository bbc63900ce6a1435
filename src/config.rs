use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::model::Dataset;
use crate::error::{Error, Result};
use crate::text::TextAnalysisLimits;

/// Half-open range of column positions, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRange {
    pub start: usize,
    pub end: usize,
}

impl ColumnRange {
    pub fn positions(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Which columns play which role, plus output sizes.
///
/// Every field falls back to the layout of the standard course survey
/// export, so a config file only needs the keys it changes:
///
/// ```json
/// { "text_columns": [4, 5], "word_cloud_size": 30 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub satisfaction_columns: ColumnRange,
    pub text_columns: Vec<usize>,
    /// Also drives the distribution charts.
    pub correlation_columns: Vec<usize>,
    /// Joined with `" : "` to label word drill-down rows.
    pub author_columns: Vec<usize>,
    pub word_cloud_size: usize,
    pub keyword_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            satisfaction_columns: ColumnRange { start: 11, end: 22 },
            text_columns: vec![22, 23, 25],
            correlation_columns: vec![7, 9, 10, 24],
            author_columns: vec![6, 8],
            word_cloud_size: crate::text::frequency::DEFAULT_TOP_WORDS,
            keyword_limit: crate::text::classifier::DEFAULT_KEYWORD_LIMIT,
        }
    }
}

impl AnalysisConfig {
    /// Read and validate a JSON config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_json::from_str(&text)?;
        config.validate()?;
        log::info!("Loaded analysis config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.word_cloud_size == 0 {
            return Err(Error::InvalidConfig("word_cloud_size must be positive".into()));
        }
        if self.keyword_limit == 0 {
            return Err(Error::InvalidConfig("keyword_limit must be positive".into()));
        }
        let range = self.satisfaction_columns;
        if range.start > range.end {
            return Err(Error::InvalidConfig(format!(
                "satisfaction_columns range {}..{} is reversed",
                range.start, range.end
            )));
        }
        Ok(())
    }

    pub fn text_limits(&self) -> TextAnalysisLimits {
        TextAnalysisLimits {
            word_cloud_size: self.word_cloud_size,
            keyword_limit: self.keyword_limit,
        }
    }

    /// Resolve every positional role against a dataset's column order.
    pub fn resolve(&self, dataset: &Dataset) -> ColumnRoles {
        let satisfaction: Vec<usize> = self.satisfaction_columns.positions().collect();
        ColumnRoles {
            satisfaction: dataset.resolve_columns(&satisfaction),
            text: dataset.resolve_columns(&self.text_columns),
            correlation: dataset.resolve_columns(&self.correlation_columns),
            author: dataset.resolve_columns(&self.author_columns),
        }
    }
}

/// Column names per role; positions past the last column are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    pub satisfaction: Vec<String>,
    pub text: Vec<String>,
    pub correlation: Vec<String>,
    pub author: Vec<String>,
}

impl ColumnRoles {
    pub fn is_satisfaction(&self, column: &str) -> bool {
        self.satisfaction.iter().any(|c| c == column)
    }
}
