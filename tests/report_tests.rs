use survey_lens::data::export::{write_level_matches, write_word_matches};
use survey_lens::data::loader::load_csv;
use survey_lens::{AnalysisConfig, AnalysisState, ColumnRange, SearchScope, StatisticKind};

const RATINGS: [u8; 10] = [5, 5, 4, 3, 5, 2, 4, 5, 3, 4];

const COMMENTS: [&str; 10] = [
    "강의가 정말 좋았어요",
    "강의 최고",
    "실습 시간이 부족했습니다",
    "",
    "강의 내용이 유익했어요",
    "너무 어려웠어요",
    "실습 시간을 늘려 주세요",
    "강의가 정말 좋았어요",
    "",
    "자료 부족",
];

fn label(rating: u8) -> &'static str {
    match rating {
        5 => "매우 만족",
        4 => "다소 만족",
        3 => "보통",
        2 => "약간 불만족",
        _ => "매우 불만족",
    }
}

/// Ten responses: author fields, a 1..5 rating, its Likert label, a comment
/// and a score that is exactly twice the rating.
fn state() -> AnalysisState {
    let mut csv = String::from("이름,소속,rating,만족도,의견,점수\n");
    for (i, (&rating, comment)) in RATINGS.iter().zip(COMMENTS).enumerate() {
        csv.push_str(&format!(
            "학생{i},{}반,{rating},{},{comment},{}\n",
            i % 2 + 1,
            label(rating),
            u32::from(rating) * 2
        ));
    }
    let dataset = load_csv(csv.as_bytes()).unwrap();

    let config = AnalysisConfig {
        satisfaction_columns: ColumnRange { start: 3, end: 4 },
        text_columns: vec![4],
        correlation_columns: vec![2, 5],
        author_columns: vec![1, 0],
        ..AnalysisConfig::default()
    };
    let mut state = AnalysisState::new(config);
    state.set_dataset(dataset);
    state
}

#[test]
fn test_full_report() {
    let state = state();
    let report = state.report().unwrap();

    assert_eq!(report.profile.total_rows, 10);
    assert_eq!(report.profile.total_columns, 6);
    assert_eq!(report.filtered_rows, 10);

    let rating = report.numeric_column("rating").unwrap();
    assert_eq!(rating.summary.count, 10);
    assert!((rating.summary.average - 4.0).abs() < 1e-9);
    assert_eq!(rating.summary.min, 2.0);
    assert_eq!(rating.summary.max, 5.0);
    assert_eq!(rating.derived.top_box_threshold, 5.0);
    // four of the ten ratings are 5
    assert!((rating.derived.top_box_percent - 40.0).abs() < 1e-9);
    let levels: Vec<(i64, usize)> = rating.levels.iter().map(|l| (l.level, l.count)).collect();
    assert_eq!(levels, vec![(5, 4), (4, 3), (3, 2), (2, 1), (1, 0)]);

    assert_eq!(report.satisfaction.len(), 1);
    let sat = &report.satisfaction[0];
    assert_eq!(sat.column, "만족도");
    assert_eq!(sat.count, 10);
    assert!((sat.average - 4.0).abs() < 1e-9);
    assert_eq!(sat.level_counts, [0, 1, 2, 3, 4]);

    assert_eq!(report.correlation.columns, vec!["rating", "점수"]);
    assert!((report.correlation.matrix[0][1] - 1.0).abs() < 1e-9);

    assert_eq!(report.distributions.len(), 2);
    assert_eq!(report.histograms.len(), 2);
    assert_eq!(report.histograms[0].total(), 10);

    let text = report.text_column("의견").unwrap();
    assert!(text.total_words > 0);
    let lecture = text.word_cloud.iter().find(|w| w.text == "강의").unwrap();
    assert_eq!(lecture.frequency, 4);
}

#[test]
fn test_top_box_filter_narrows_everything_but_correlation() {
    let mut state = state();
    let filter = state
        .standard_filter("rating", StatisticKind::TopBox)
        .unwrap()
        .unwrap();
    state.set_statistic_filter(filter).unwrap();
    assert_eq!(state.visible_indices, vec![0, 1, 4, 7]);

    let report = state.report().unwrap();
    assert_eq!(report.filtered_rows, 4);
    assert_eq!(report.numeric_column("rating").unwrap().summary.count, 4);
    assert_eq!(report.satisfaction[0].count_at(5), 4);
    // distributions follow the view, correlation does not
    assert_eq!(report.distributions[0].values.len(), 4);
    assert_eq!(report.correlation.columns.len(), 2);
    assert_eq!(report.profile.total_rows, 10);

    state.clear_statistic_filter();
    assert_eq!(state.report().unwrap().filtered_rows, 10);
}

#[test]
fn test_word_drilldown_agrees_with_word_cloud() {
    let mut state = state();
    state.set_search("강의", SearchScope::Column("의견".into())).unwrap();

    let report = state.report().unwrap();
    let cloud = &report.text_column("의견").unwrap().word_cloud;
    let lecture = cloud.iter().find(|w| w.text == "강의").unwrap();

    let matches = state.word_matches("의견", "강의").unwrap();
    assert_eq!(matches.len(), lecture.frequency);
    let rows: Vec<usize> = matches.iter().map(|m| m.row_number).collect();
    assert_eq!(rows, vec![1, 2, 3, 4]);
    assert_eq!(matches[0].author, "1반 : 학생0");
    assert_eq!(matches[1].text, "강의 최고");

    let mut buf = Vec::new();
    write_word_matches(&mut buf, &matches).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.starts_with("작성자,행번호,내용\n1반 : 학생0,1,강의가 정말 좋았어요\n"));
}

#[test]
fn test_level_drilldown_export() {
    let state = state();
    let matches = state.level_matches("만족도", 2).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].row_number, 6);

    let mut buf = Vec::new();
    let columns = state.view().unwrap().column_names();
    write_level_matches(&mut buf, &matches, columns).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out,
        "행번호,이름,소속,rating,만족도,의견,점수\n6,학생5,2반,2,약간 불만족,너무 어려웠어요,4\n"
    );
}

#[test]
fn test_report_serializes_to_json() {
    let report = state().report().unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["filteredRows"], 10);
    assert_eq!(value["profile"]["columnKinds"][2], "number");
    assert_eq!(value["numeric"][0]["column"], "rating");
    assert_eq!(value["numeric"][0]["derived"]["topBoxThreshold"], 5.0);
    assert!(value["text"][0]["wordCloud"].is_array());
}

#[test]
fn test_report_with_student_number_column() {
    let mut csv = String::from("학번,만족도\n");
    for id in 20240001..=20240300 {
        csv.push_str(&format!("{id},보통\n"));
    }
    let mut state = AnalysisState::new(AnalysisConfig {
        satisfaction_columns: ColumnRange { start: 1, end: 2 },
        text_columns: vec![],
        correlation_columns: vec![],
        author_columns: vec![],
        ..AnalysisConfig::default()
    });
    state.set_dataset(load_csv(csv.as_bytes()).unwrap());

    let report = state.report().unwrap();
    let ids = report.numeric_column("학번").unwrap();
    assert_eq!(ids.summary.count, 300);
    assert_eq!(ids.levels.len(), 300);
    assert_eq!(ids.levels[0].level, 20240300);
    assert!(ids.levels.iter().all(|l| l.count == 1));
}
