use serde::Serialize;

use crate::data::filter::FilteredView;

/// Likert labels as they appear in survey exports, with and without the
/// inner space. `약간 불불족` is a misspelling seen in real exports.
const SATISFACTION_LABELS: &[(&str, u8)] = &[
    ("매우만족", 5),
    ("매우 만족", 5),
    ("다소만족", 4),
    ("다소 만족", 4),
    ("보통", 3),
    ("약간불만족", 2),
    ("약간 불만족", 2),
    ("약간 불불족", 2),
    ("매우불만족", 1),
    ("매우 불만족", 1),
];

/// Map a Likert label to 1..=5; unrecognized text scores 0.
pub fn score_satisfaction(text: &str) -> u8 {
    let text = text.trim();
    SATISFACTION_LABELS
        .iter()
        .find(|(label, _)| *label == text)
        .map(|&(_, score)| score)
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SatisfactionSummary {
    pub column: String,
    pub average: f64,
    pub count: usize,
    pub min: u8,
    pub max: u8,
    pub sum: u32,
    /// Responses per level; index 0 is level 1, index 4 is level 5.
    pub level_counts: [usize; 5],
}

impl SatisfactionSummary {
    /// Aggregate scores, ignoring zeros. `None` when no valid score remains.
    pub fn from_scores(column: &str, scores: impl IntoIterator<Item = u8>) -> Option<Self> {
        let valid: Vec<u8> = scores.into_iter().filter(|&s| (1..=5).contains(&s)).collect();
        let min = *valid.iter().min()?;
        let max = *valid.iter().max()?;

        let sum: u32 = valid.iter().map(|&s| u32::from(s)).sum();
        let mut level_counts = [0usize; 5];
        for &s in &valid {
            level_counts[usize::from(s) - 1] += 1;
        }

        Some(SatisfactionSummary {
            column: column.to_string(),
            average: f64::from(sum) / valid.len() as f64,
            count: valid.len(),
            min,
            max,
            sum,
            level_counts,
        })
    }

    /// Responses at a level in 1..=5; 0 for anything else.
    pub fn count_at(&self, level: u8) -> usize {
        match level {
            1..=5 => self.level_counts[usize::from(level) - 1],
            _ => 0,
        }
    }
}

/// One summary per satisfaction column with at least one recognized label.
pub fn summarize_satisfaction(view: &FilteredView<'_>, columns: &[String]) -> Vec<SatisfactionSummary> {
    columns
        .iter()
        .filter_map(|column| {
            let scores = view
                .rows()
                .map(|row| score_satisfaction(&row.get(column).as_text()));
            SatisfactionSummary::from_scores(column, scores)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(score_satisfaction("매우 만족"), 5);
        assert_eq!(score_satisfaction(" 매우만족 "), 5);
        assert_eq!(score_satisfaction("다소 만족"), 4);
        assert_eq!(score_satisfaction("보통"), 3);
        assert_eq!(score_satisfaction("약간 불만족"), 2);
        assert_eq!(score_satisfaction("약간 불불족"), 2);
        assert_eq!(score_satisfaction("매우불만족"), 1);
        assert_eq!(score_satisfaction("그냥그럼"), 0);
        assert_eq!(score_satisfaction(""), 0);
    }

    #[test]
    fn test_zero_scores_excluded() {
        let s = SatisfactionSummary::from_scores("q1", [5, 0, 3, 3, 0]).unwrap();
        assert_eq!(s.count, 3);
        assert_eq!(s.sum, 11);
        assert_eq!(s.min, 3);
        assert_eq!(s.max, 5);
        assert!((s.average - 11.0 / 3.0).abs() < 1e-12);
        assert_eq!(s.level_counts, [0, 0, 2, 0, 1]);
        assert_eq!(s.count_at(3), 2);
        assert_eq!(s.count_at(0), 0);
    }

    #[test]
    fn test_all_invalid_is_omitted() {
        assert!(SatisfactionSummary::from_scores("q1", [0, 0]).is_none());
    }
}
