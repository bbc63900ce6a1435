use serde::Serialize;

use crate::config::{AnalysisConfig, ColumnRoles};
use crate::data::filter::FilteredView;
use crate::stats::numeric::LevelCount;
use crate::stats::{
    correlate, distributions, profile, summarize_columns, summarize_satisfaction, CorrelationMatrix,
    DatasetProfile, DerivedStats, DistributionSummary, Histogram, NumericSummary, SatisfactionSummary,
};
use crate::text::{analyze_columns, TextAnalysis};

/// A numeric column with everything computed from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericReport {
    #[serde(flatten)]
    pub summary: NumericSummary,
    pub derived: DerivedStats,
    pub levels: Vec<LevelCount>,
}

impl NumericReport {
    /// `None` for a summary without values.
    pub fn new(summary: NumericSummary) -> Option<Self> {
        Some(Self {
            derived: summary.derived()?,
            levels: summary.level_distribution(),
            summary,
        })
    }
}

/// Everything the dashboard renders for one dataset and filter state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyReport {
    pub profile: DatasetProfile,
    pub filtered_rows: usize,
    pub numeric: Vec<NumericReport>,
    pub satisfaction: Vec<SatisfactionSummary>,
    pub text: Vec<TextAnalysis>,
    /// Always over the full dataset, regardless of filters.
    pub correlation: CorrelationMatrix,
    pub distributions: Vec<DistributionSummary>,
    pub histograms: Vec<Histogram>,
}

impl SurveyReport {
    pub fn build(view: &FilteredView<'_>, config: &AnalysisConfig, roles: &ColumnRoles) -> Self {
        let dataset = view.dataset();

        let distributions = distributions(view.rows(), &config.correlation_columns, &dataset.column_names);
        let histograms = distributions.iter().map(Histogram::from_distribution).collect();

        SurveyReport {
            profile: profile(dataset),
            filtered_rows: view.len(),
            numeric: summarize_columns(view).into_iter().filter_map(NumericReport::new).collect(),
            satisfaction: summarize_satisfaction(view, &roles.satisfaction),
            text: analyze_columns(view, &roles.text, config.text_limits()),
            correlation: correlate(&dataset.rows, &config.correlation_columns, &dataset.column_names),
            distributions,
            histograms,
        }
    }

    pub fn numeric_column(&self, column: &str) -> Option<&NumericReport> {
        self.numeric.iter().find(|n| n.summary.column == column)
    }

    pub fn text_column(&self, column: &str) -> Option<&TextAnalysis> {
        self.text.iter().find(|t| t.column == column)
    }
}
