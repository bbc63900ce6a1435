use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Writes a synthetic course-evaluation export in the default column layout:
/// author fields at 6 and 8, numeric scores at 7, 9, 10 and 24, Likert
/// answers at 11..22 and free text at 22, 23 and 25.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a sample survey CSV")]
struct Args {
    /// Number of responses
    #[arg(short, long, default_value = "200")]
    rows: usize,

    /// Output path
    #[arg(short, long, default_value = "sample_survey.csv")]
    out: PathBuf,

    /// PRNG seed
    #[arg(long, default_value = "42")]
    seed: u64,
}

const COURSES: &[&str] = &["데이터 분석 기초", "파이썬 실무", "리더십 과정"];
const DEPARTMENTS: &[&str] = &["영업본부", "개발팀", "인사팀", "재무팀", "마케팅팀"];
const SURNAMES: &[&str] = &["김", "이", "박", "최", "정", "강", "조", "윤"];
const GIVEN_NAMES: &[&str] = &["민수", "영희", "지훈", "서연", "현우", "수빈", "도윤", "하은"];
const HOURS: &[f64] = &[8.0, 16.0, 24.0, 40.0];

const QUESTIONS: &[&str] = &[
    "교육 목표 명확성",
    "교육 내용 구성",
    "강사 전문성",
    "강사 전달력",
    "교재 품질",
    "실습 비중",
    "교육 시간 적절성",
    "교육 환경",
    "운영 지원",
    "업무 활용도",
    "전반적 만족도",
];

const LIKERT: [&str; 5] = ["매우 불만족", "약간 불만족", "보통", "다소 만족", "매우 만족"];

const PRAISE: &[&str] = &[
    "강의가 정말 좋았어요",
    "강사님 설명이 친절하고 이해가 잘 되었습니다",
    "실습 위주라 유익했습니다",
    "현업에 바로 적용할 수 있는 내용이라 도움이 많이 되었어요",
    "교재가 체계적이고 알찬 구성이었습니다",
    "분위기가 편안해서 집중이 잘 됐어요",
];

const COMPLAINTS: &[&str] = &[
    "실습 시간이 부족했습니다",
    "내용이 너무 어려웠어요",
    "진도가 빨라서 따라가기 힘들었습니다",
    "강의실이 좁고 불편했어요",
    "예제가 지루하고 반복적이었습니다",
];

const SUGGESTIONS: &[&str] = &[
    "실습 시간을 늘려 주셨으면 좋겠습니다",
    "심화 과정이 추가되면 좋겠어요",
    "사전 자료를 미리 제공해 주세요",
    "온라인 복습 자료가 있으면 좋겠습니다",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    fn pick<'a, T: ?Sized>(&mut self, items: &'a [&'a T]) -> &'a T {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Free text for one answer; blank for some respondents.
fn comment(rng: &mut SimpleRng, pool: &[&str], blank_rate: f64) -> String {
    if rng.chance(blank_rate) {
        return String::new();
    }
    let first = rng.pick(pool);
    if rng.chance(0.3) {
        let second = rng.pick(pool);
        if second != first {
            return format!("{first}. {second}!");
        }
    }
    first.to_string()
}

fn header() -> Vec<String> {
    let mut columns: Vec<String> = [
        "응답ID", "제출시각", "과정명", "차수", "성별", "연령대", "소속", "교육시간", "이름", "사전점수", "사후점수",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    columns.extend(QUESTIONS.iter().map(|q| q.to_string()));
    columns.extend(
        ["좋았던 점", "개선할 점", "종합점수", "기타 의견"]
            .iter()
            .map(|s| s.to_string()),
    );
    columns
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    let mut writer =
        csv::Writer::from_path(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    writer.write_record(header())?;

    for id in 1..=args.rows {
        // Respondent-level mood drives every answer.
        let mood = rng.gauss(3.9, 0.7).clamp(1.0, 5.0);

        let pre = rng.gauss(60.0, 12.0).clamp(0.0, 100.0).round();
        let post = (pre + rng.gauss(12.0, 6.0) + (mood - 3.0) * 4.0)
            .clamp(0.0, 100.0)
            .round();

        let mut record = vec![
            id.to_string(),
            format!("2024-03-{:02} {:02}:{:02}", 1 + id % 28, 9 + id % 9, id % 60),
            rng.pick(COURSES).to_string(),
            format!("{}", 1 + id % 3),
            rng.pick(&["남", "여"]).to_string(),
            rng.pick(&["20대", "30대", "40대", "50대"]).to_string(),
            rng.pick(DEPARTMENTS).to_string(),
            HOURS[(rng.next_u64() % HOURS.len() as u64) as usize].to_string(),
            format!("{}{}", rng.pick(SURNAMES), rng.pick(GIVEN_NAMES)),
            pre.to_string(),
            post.to_string(),
        ];

        for _ in QUESTIONS {
            if rng.chance(0.03) {
                record.push(String::new());
                continue;
            }
            let score = (mood + rng.gauss(0.0, 0.6)).round().clamp(1.0, 5.0) as usize;
            record.push(LIKERT[score - 1].to_string());
        }

        let (praise_blank, complaint_blank) = if mood >= 3.5 { (0.15, 0.6) } else { (0.6, 0.15) };
        record.push(comment(&mut rng, PRAISE, praise_blank));
        record.push(comment(&mut rng, COMPLAINTS, complaint_blank));

        let overall = (mood * 20.0 + rng.gauss(0.0, 5.0)).clamp(0.0, 100.0);
        record.push(format!("{overall:.1}"));
        record.push(comment(&mut rng, SUGGESTIONS, 0.5));

        writer.write_record(&record)?;
    }

    writer.flush()?;
    println!("Wrote {} responses to {}", args.rows, args.out.display());
    Ok(())
}
