use crate::config::{AnalysisConfig, ColumnRoles};
use crate::data::filter::{
    filtered_indices, FilterState, FilteredView, SearchFilter, SearchScope, StatisticFilter, StatisticKind,
};
use crate::data::model::Dataset;
use crate::drilldown::{self, LevelMatch, WordMatch};
use crate::error::{Error, Result};
use crate::report::SurveyReport;
use crate::stats::{score_satisfaction, summarize, DerivedStats};
use crate::text::Tokenizer;

// ---------------------------------------------------------------------------
// Analysis state
// ---------------------------------------------------------------------------

/// The full analysis state, independent of rendering.
#[derive(Debug, Default)]
pub struct AnalysisState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<Dataset>,

    pub config: AnalysisConfig,

    /// Column names per role, resolved against the loaded dataset.
    pub roles: ColumnRoles,

    /// Active search and statistic filters.
    pub filters: FilterState,

    /// Indices of rows passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    tokenizer: Tokenizer,
}

impl AnalysisState {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Ingest a newly loaded dataset. Filters are cleared and every row is
    /// visible.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.roles = self.config.resolve(&dataset);
        self.filters = FilterState::default();
        self.visible_indices = (0..dataset.len()).collect();
        self.dataset = Some(dataset);
    }

    /// Swap the config, re-resolving column roles and filters.
    pub fn set_config(&mut self, config: AnalysisConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        if let Some(ds) = &self.dataset {
            self.roles = self.config.resolve(ds);
        }
        self.refilter();
        Ok(())
    }

    /// Set the search term. A blank term disables searching.
    pub fn set_search(&mut self, term: &str, scope: SearchScope) -> Result<()> {
        if let SearchScope::Column(column) = &scope {
            self.check_column(column)?;
        }
        self.filters.search = Some(SearchFilter::new(term, scope));
        self.refilter();
        Ok(())
    }

    pub fn set_statistic_filter(&mut self, filter: StatisticFilter) -> Result<()> {
        self.check_column(&filter.column)?;
        log::debug!("statistic filter: {}", filter.description);
        self.filters.statistic = Some(filter);
        self.refilter();
        Ok(())
    }

    pub fn clear_statistic_filter(&mut self) {
        self.filters.statistic = None;
        self.refilter();
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filters, &self.roles.satisfaction);
            log::debug!("{} of {} rows visible", self.visible_indices.len(), ds.len());
        }
    }

    /// The rows currently passing the filters.
    pub fn view(&self) -> Result<FilteredView<'_>> {
        let ds = self.dataset.as_ref().ok_or(Error::NoDataset)?;
        Ok(FilteredView::new(ds, &self.visible_indices))
    }

    pub fn report(&self) -> Result<SurveyReport> {
        Ok(SurveyReport::build(&self.view()?, &self.config, &self.roles))
    }

    /// Spread statistics of a column over the visible rows, read the way the
    /// statistic filter reads it: Likert scores (unrecognized labels skipped)
    /// for satisfaction columns, plain numbers otherwise.
    pub fn column_stats(&self, column: &str) -> Result<Option<DerivedStats>> {
        self.check_column(column)?;
        let view = self.view()?;
        let values: Vec<f64> = if self.roles.is_satisfaction(column) {
            view.rows()
                .map(|row| score_satisfaction(&row.get(column).as_text()))
                .filter(|&score| score > 0)
                .map(f64::from)
                .collect()
        } else {
            view.numeric_values(column)
        };
        Ok(summarize(column, values).and_then(|s| s.derived()))
    }

    /// Build one of the standard filters from the column's current stats.
    /// `None` when the column has no values or the interval is undefined.
    pub fn standard_filter(&self, column: &str, kind: StatisticKind) -> Result<Option<StatisticFilter>> {
        let Some(stats) = self.column_stats(column)? else {
            return Ok(None);
        };
        Ok(match kind {
            StatisticKind::TopBox => Some(StatisticFilter::top_box(column, &stats)),
            StatisticKind::BottomBox => Some(StatisticFilter::bottom_box(column, &stats)),
            StatisticKind::ConfidenceInterval => StatisticFilter::confidence_interval(column, &stats),
            StatisticKind::Custom => None,
        })
    }

    /// Visible rows whose text in `column` tokenizes to include `word`.
    pub fn word_matches(&self, column: &str, word: &str) -> Result<Vec<WordMatch>> {
        self.check_column(column)?;
        Ok(drilldown::word_matches(
            &self.view()?,
            column,
            word,
            &self.roles.author,
            &self.tokenizer,
        ))
    }

    /// Visible rows at `level` in `column`.
    pub fn level_matches(&self, column: &str, level: i64) -> Result<Vec<LevelMatch<'_>>> {
        self.check_column(column)?;
        let is_satisfaction = self.roles.is_satisfaction(column);
        Ok(drilldown::level_matches(&self.view()?, column, level, is_satisfaction))
    }

    fn check_column(&self, column: &str) -> Result<()> {
        match &self.dataset {
            Some(ds) if !ds.column_names.iter().any(|c| c == column) => {
                Err(Error::UnknownColumn(column.to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColumnRange;
    use crate::data::filter::Predicate;
    use crate::data::model::{CellValue, Row};

    fn state() -> AnalysisState {
        let columns: Vec<String> = vec!["이름".into(), "만족도".into(), "의견".into()];
        let rows = vec![
            Row::from_iter([
                ("이름", CellValue::from("김철수")),
                ("만족도", CellValue::from("매우 만족")),
                ("의견", CellValue::from("강의 최고")),
            ]),
            Row::from_iter([
                ("이름", CellValue::from("이영희")),
                ("만족도", CellValue::from("보통")),
                ("의견", CellValue::from("실습 부족")),
            ]),
            Row::from_iter([
                ("이름", CellValue::from("박민수")),
                ("만족도", CellValue::from("다소 만족")),
                ("의견", CellValue::from("강의 자료 부족")),
            ]),
        ];
        let config = AnalysisConfig {
            satisfaction_columns: ColumnRange { start: 1, end: 2 },
            text_columns: vec![2],
            correlation_columns: vec![],
            author_columns: vec![0],
            ..AnalysisConfig::default()
        };
        let mut state = AnalysisState::new(config);
        state.set_dataset(Dataset::new(columns, rows));
        state
    }

    #[test]
    fn test_no_dataset() {
        let state = AnalysisState::default();
        assert!(matches!(state.view(), Err(Error::NoDataset)));
        assert!(matches!(state.report(), Err(Error::NoDataset)));
    }

    #[test]
    fn test_search_then_statistic_filter() {
        let mut state = state();
        state.set_search("강의", SearchScope::Column("의견".into())).unwrap();
        assert_eq!(state.visible_indices, vec![0, 2]);

        let filter = StatisticFilter::custom("만족도", Predicate::AtLeast { threshold: 5.0 }, "5점");
        state.set_statistic_filter(filter).unwrap();
        assert_eq!(state.visible_indices, vec![0]);

        state.clear_statistic_filter();
        assert_eq!(state.visible_indices, vec![0, 2]);

        state.set_search("  ", SearchScope::AllColumns).unwrap();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_unknown_column_rejected() {
        let mut state = state();
        let err = state.set_search("x", SearchScope::Column("없는열".into()));
        assert!(matches!(err, Err(Error::UnknownColumn(c)) if c == "없는열"));
        assert!(state.word_matches("없는열", "강의").is_err());
    }

    #[test]
    fn test_drilldown_follows_view() {
        let mut state = state();
        assert_eq!(state.word_matches("의견", "부족").unwrap().len(), 2);
        assert_eq!(state.level_matches("만족도", 4).unwrap()[0].row_number, 3);

        state.set_search("박민수", SearchScope::AllColumns).unwrap();
        let words = state.word_matches("의견", "부족").unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].row_number, 1);
        assert_eq!(words[0].author, "박민수");
    }

    #[test]
    fn test_standard_filter_on_satisfaction_scores() {
        let mut state = state();
        let stats = state.column_stats("만족도").unwrap().unwrap();
        // scores 5, 3, 4
        assert_eq!(stats.top_box_threshold, 5.0);

        let filter = state
            .standard_filter("만족도", StatisticKind::TopBox)
            .unwrap()
            .unwrap();
        state.set_statistic_filter(filter).unwrap();
        assert_eq!(state.visible_indices, vec![0]);

        assert!(state.standard_filter("의견", StatisticKind::TopBox).unwrap().is_none());
    }

    #[test]
    fn test_invalid_config_keeps_previous() {
        let mut state = state();
        let bad = AnalysisConfig {
            word_cloud_size: 0,
            ..AnalysisConfig::default()
        };
        assert!(matches!(state.set_config(bad), Err(Error::InvalidConfig(_))));
        assert_eq!(state.roles.text, vec!["의견"]);
    }
}
