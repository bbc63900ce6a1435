//! Fixed Korean word lists used by the tokenizer and the classifier.
//!
//! Every list is a `&'static [&'static str]` in priority order. Set lookups
//! are built once on first use and shared through [`lexicon()`].

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Positive feedback vocabulary.
pub const POSITIVE_WORDS: &[&str] = &[
    "만족", "아주만족", "대만족", "최고", "매우좋", "좋았", "좋았습", "좋음", "좋습니다", "좋아요",
    "좋았어요", "좋네요", "훌륭", "탁월", "알차", "탄탄", "충실", "충분", "풍부", "짱", "베리굿", "굿",
    "추천", "강추", "유익", "유용", "도움", "도움되", "도움이됐", "유의미", "보탬", "기여", "효율", "효과",
    "효과적", "이해", "이해가잘", "이해하기쉽", "쉽게", "쉬웠", "명확", "명료", "분명", "깔끔", "정리잘",
    "정돈", "체계", "체계적", "구성좋", "구성이좋", "구성이잘", "친절", "배려", "상냥", "차분", "침착",
    "겸손", "열정", "열의", "성실", "꼼꼼", "정성", "세심", "정확", "책임감", "전문", "전문성", "경험많",
    "노하우", "현업경험", "실무경험", "사례중심", "케이스중심", "표준비교", "산출물비교", "비교설명",
    "소통원활", "소통좋", "질문잘받", "QnA좋", "피드백좋", "응답빠", "응대좋", "실무", "현업", "연계",
    "연결", "적용가능", "바로적용", "실용", "실용적", "현장감", "구체적", "현실적", "밸런스", "균형",
    "속도적절", "페이스적절", "적절", "적당", "적합", "맞춤", "맞춤형", "재밌", "재미", "흥미", "몰입",
    "집중", "유쾌", "즐거", "활기", "자료좋", "교재좋", "예제좋", "실습좋", "설명잘", "설명이잘",
    "명강의", "명품강의",
];

/// Negative feedback vocabulary.
pub const NEGATIVE_WORDS: &[&str] = &[
    "아쉽", "아쉬웠", "아쉬움", "미흡", "부족", "부족했", "모자라", "모자람", "어렵", "어려움", "난해",
    "복잡", "헷갈", "혼동", "혼란", "산만", "정리안", "정돈안", "두서없", "불만", "불편", "불친절",
    "무성의", "소극", "무관심", "일방향", "일방적", "일방통행", "소통부족", "피드백없", "응답늦", "문제",
    "오류", "에러", "버그", "실수", "틀렸", "오타", "교재오타", "자료오류", "부정확", "애매", "지연",
    "지각", "늦었", "늦게", "늦음", "딜레이", "스케줄문제", "일정문제", "변경잦", "빠르", "빨랐", "급했",
    "졸속", "느리", "느렸", "지루", "졸리", "따분", "루즈", "짧", "짧었", "짧아서", "시간부족", "타임부족",
    "길", "길었", "장황", "과도", "과했다", "과부하", "빡세", "부담", "과제많", "숙제많", "평가부담",
    "진도과", "실습부족", "실습없", "예제부족", "케이스부족", "자료부족", "자료늦", "자료미제공",
    "자료공유안", "자료안", "설명부족", "설명모호", "설명빨라", "설명느려", "설명없", "설명부정확",
    "난이도높", "난이도낮", "수준차", "대상안맞", "대상부적", "초급자힘들", "고급자지루", "접속문제",
    "끊김", "렉", "버퍼링", "음질", "잡음", "소음", "화질", "화면문제", "마이크문제", "프로젝터문제",
    "프젝터", "환경문제", "냉난방", "춥", "덥", "의자불편", "책상불편", "공간협소", "좌석불편",
    "장비부족", "주차불편", "식사불편", "편의불편", "네트워크", "wifi", "와이파이", "네트웍", "네트웤",
    "같습니다", "좋을것", "같네요", "같아요", "시간",
];

/// Improvement-suggestion vocabulary.
pub const SUGGEST_WORDS: &[&str] = &[
    "실습", "실습시간", "실습확대", "실습추가", "실습보강", "핸즈온", "워크숍", "워크샵", "케이스",
    "사례추가", "예제추가", "예시추가", "시간", "시간확대", "시간늘려", "시간늘리", "시간조정",
    "시간배분", "휴식시간", "쉬는시간", "페이스조정", "진도조정", "속도조정", "타임박스", "운영",
    "운영개선", "운영보완", "운영방식", "운영안", "운영변경", "운영정비", "운영재정렬", "공지",
    "사전안내", "사전공유", "사전자료", "사전숙지", "사전과제", "오리엔테이션", "OT", "가이드",
    "템플릿", "체크리스트", "매뉴얼", "레퍼런스", "참고자료", "링크", "자료실", "슬라이드공유",
    "자료공유", "업데이트", "정리본", "요약본", "핸드아웃", "QnA", "질의응답", "FAQ", "멘토링", "상담",
    "피드백세션", "코칭", "스터디", "커뮤니티", "심화", "고급", "기초", "입문", "트랙", "선택형",
    "맞춤형", "분리", "통합", "모듈화", "실무적용", "현업적용", "표준", "산출물", "케이스스터디",
    "튜토리얼", "데모", "녹화", "복습", "재수강", "추가세션", "보충수업", "리마인드", "리캡", "온라인",
    "오프라인", "하이브리드", "원격", "화상", "줌", "zoom", "팀즈", "Teams", "장비", "모니터", "좌석",
    "공간", "주차", "편의", "간식", "음료",
];

/// Survey-specific stopwords: courtesy phrases and filler that carry no
/// topic of their own.
pub const CUSTOM_STOPWORDS: &[&str] = &[
    "좋을", "있는", "되는", "많은", "많이", "쉽게", "내용을", "특별히", "수고하셨습니다", "같습니다",
    "감사합니다", "좋았습니다", "주셨습니다", "되었습니다", "좋습니다", "부탁드립니다", "좋겠습니다",
    "있었습니다", "없어요", "같아요", "있으면", "좋겠음", "좋을것", "유익했습니다", "좋았음", "도움이",
    "없음", "없습니다", "있는것", "되는것", "많은것", "교육", "너무", "좀더", "있어", "대해", "비해",
    "통해", "좋은", "내용", "관련", "주셔서", "적절한", "감사", "좋았", "되었", "좋겠", "대한", "합니",
    "아직", "주세요", "필요", "활용한", "고생하셨", "이해하기", "때문", "이해", "쉽지", "쉬운", "살짝",
    "쉽고", "않았", "이미", "적당한", "적절", "적당히", "해주", "전박적", "설명", "부분", "보통",
    "전반적", "없는", "있음", "아주", "적절함", "않은", "생각", "점이", "진행", "아쉬웠", "수고", "고생",
    "감사하겠", "특히", "많았으면", "딱히", "했으면", "좋을듯", "이해할", "만족", "주셨", "위주",
    "설명해", "만족스러웠", "등의", "지금", "도움될", "도움",
];

/// General Korean stopword list (function words, interjections, numerals).
pub const KOREAN_STOPWORDS: &[&str] = &[
    "아", "휴", "아이구", "아이쿠", "아이고", "어", "나", "우리", "저희", "따라", "의해", "을", "를", "에",
    "의", "가", "으로", "로", "에게", "뿐이다", "의거하여", "근거하여", "입각하여", "기준으로", "예하면",
    "저", "소인", "소생", "지말고", "하지마", "하지마라", "다른", "물론", "또한", "그리고", "막론하고",
    "관계없이", "그러나", "그런데", "하지만", "든간에", "설사", "비록", "더라도", "아니면", "불문하고",
    "향하여", "향해서", "향하다", "쪽으로", "틈타", "이용하여", "타다", "오르다", "제외하고", "하여야",
    "비로소", "외에도", "이곳", "여기", "부터", "기점으로", "따라서", "이리하여", "그리하여", "일때",
    "할때", "앞에서", "중에서", "보는데서", "으로써", "로써", "까지", "해야한다", "일것이다", "반드시",
    "할줄알다", "할수있다", "할수있어", "한다면", "등", "등등", "제", "겨우", "단지", "다만", "할뿐",
    "딩동", "댕그", "대해서", "대하여", "대하면", "훨씬", "얼마나", "얼마만큼", "얼마큼", "남짓", "여",
    "얼마간", "약간", "다소", "좀", "조금", "다수", "몇", "얼마", "지만", "하물며", "그렇지만",
    "이외에도", "다음에", "반대로", "만약", "그렇지않으면", "까악", "툭", "딱", "삐걱거리다", "보드득",
    "비걱거리다", "꽈당", "응당", "각", "각각", "여러분", "각종", "각자", "제각기", "하도록하다", "와",
    "과", "그러므로", "그래서", "고로", "거니와", "이지만", "관하여", "관한", "과연", "실로",
    "아니나다를가", "생각한대로", "진짜로", "한적이있다", "하곤하였다", "하", "하하", "허허", "아하",
    "거바", "오", "왜", "어째서", "무엇때문에", "어찌", "하겠는가", "무슨", "어디", "어느곳", "더군다나",
    "더욱이는", "어느때", "언제", "야", "이봐", "어이", "여보시오", "흐흐", "흥", "헉헉", "헐떡헐떡",
    "영차", "여차", "어기여차", "끙끙", "아야", "앗", "콸콸", "졸졸", "좍좍", "뚝뚝", "주룩주룩", "솨",
    "우르르", "그래도", "또", "바꾸어말하면", "바꾸어말하자면", "혹은", "혹시", "답다", "및", "즉",
    "지든지", "설령", "가령", "하더라도", "할지라도", "일지라도", "거의", "하마터면", "인젠", "이젠",
    "된바에야", "된이상", "만큼", "어찌됏든", "그위에", "게다가", "고려하면", "하게될것이다", "비교적",
    "보다더", "비하면", "시키다", "하게하다", "할만하다", "의해서", "연이서", "이어서", "잇따라",
    "뒤따라", "뒤이어", "결국", "의지하여", "기대여", "통하여", "자마자", "더욱더", "불구하고",
    "얼마든지", "마음대로", "곧", "즉시", "바로", "당장", "하자마자", "하면된다", "그래", "그렇지",
    "요컨대", "구체적으로", "말하자면", "시작하여", "시초에", "이상", "허", "헉", "허걱", "바와같이",
    "해도좋다", "해도된다", "더구나", "와르르", "팍", "퍽", "펄렁", "동안", "이래", "하고있었다",
    "이었다", "에서", "로부터", "했어요", "해요", "함께", "같이", "더불어", "마저", "마저도", "양자",
    "모두", "습니다", "가까스로", "하려고하다", "즈음하여", "해봐요", "습니까", "무릎쓰고",
    "개의치않고", "매", "매번", "들", "모", "어느것", "어느", "갖고말하자면", "어느쪽", "어느해",
    "언젠가", "어떤것", "저기", "저쪽", "저것", "그때", "그럼", "그러면", "요만한걸", "저것만큼",
    "그저", "이르기까지", "너", "너희", "당신", "설마", "차라리", "할지언정", "할망정", "구토하다",
    "게우다", "토하다", "메쓰겁다", "옆사람", "퉤", "쳇", "힘입어", "그", "다음", "버금", "두번째로",
    "기타", "첫번째로", "나머지는", "그중에서", "견지에서", "입장에서", "위해서", "의해되다",
    "하도록시키다", "뿐만아니라", "전후", "전자", "앞의것", "잠시", "잠깐", "하면서", "그러한즉",
    "그런즉", "남들", "아무거나", "어찌하든지", "같다", "비슷하다", "예컨대", "이럴정도로", "어떻게",
    "만일", "만약에", "무엇", "어떤", "아래윗", "조차", "한데", "여전히", "심지어", "까지도", "조차도",
    "때", "시각", "무렵", "어때", "어떠한", "하여금", "네", "예", "우선", "누구", "아무도", "줄은모른다",
    "겸사겸사", "하는바", "그러니", "그러니까", "때문에", "그들", "너희들", "타인", "것", "것들",
    "위하여", "공동으로", "동시에", "어찌하여", "붕붕", "윙윙", "엉엉", "휘익", "오호", "어쨋든",
    "하기보다는", "놀라다", "마치", "아니라면", "쉿", "아니었다면", "하든지", "이라면", "좋아",
    "알았어", "하는것도", "그만이다", "하나", "일", "일반적으로", "일단", "한켠으로는", "오자마자",
    "이렇게되면", "이와같다면", "전부", "한마디", "한항목", "근거로", "하기에", "아울러", "까닭으로",
    "이유만으로", "있다", "연관되다", "어떤것들", "여부", "하느니", "운운", "이러이러하다", "하구나",
    "하도다", "다시말하면", "다음으로", "우리들", "오히려", "하기는한데", "어떻해", "어찌됏어", "본대로",
    "자", "이", "이쪽", "이것", "이번", "이렇게말하자면", "이런", "이러한", "요만큼", "이만큼", "이와같다",
    "이때", "이렇구나", "끼익", "삐걱", "따위", "왜냐하면", "중의하나", "오직", "오로지", "관해서는",
    "혼자", "자기", "자기집", "자신", "총적으로", "으로서", "참", "쿵", "탕탕", "쾅쾅", "둥둥", "봐", "봐라",
    "아이야", "아니", "와아", "응", "아이", "참나", "년", "월", "령", "영", "삼", "사", "육", "륙", "칠",
    "팔", "구", "이천육", "이천칠", "이천팔", "이천구", "둘", "셋", "넷", "다섯", "여섯", "일곱", "여덟",
    "아홉",
];

/// Grammatical particles and endings, longest first. Only the first match
/// that leaves at least two characters is stripped.
pub const PARTICLES: &[&str] = &[
    "합니다", "습니다", "이든지", "든지", "이든가", "든가", "라도", "조차", "마저", "이나", "이라",
    "이야", "이다", "더라", "거나", "던가", "에서", "으로", "부터", "까지", "을", "를", "이", "가", "은",
    "는", "와", "의", "에", "로", "만", "나", "라", "야", "아", "다", "님", "도", "과",
];

/// Verbal endings that carry no meaning once particles are gone.
pub const MEANINGLESS_ENDINGS: &[&str] = &[
    "습니", "합니", "었습", "았습", "겠습", "했습", "되었", "되어", "었어", "았어", "겠어", "었음", "았음",
    "겠음", "했음", "되었음", "되어줬", "하셨", "셨습", "였습", "였어", "였음", "였겠", "해주", "해줘",
    "드리", "드려", "셔서", "해서", "여서", "어서", "있었", "내용이었", "하지", "어렵지",
];

// ---------------------------------------------------------------------------
// Shared read-only view
// ---------------------------------------------------------------------------

/// Read-only access to the word lists with prebuilt stopword sets.
#[derive(Debug)]
pub struct Lexicon {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
    pub suggest: &'static [&'static str],
    pub particles: &'static [&'static str],
    pub endings: &'static [&'static str],
    korean_stopwords: HashSet<&'static str>,
    custom_stopwords: HashSet<&'static str>,
}

impl Lexicon {
    fn build() -> Self {
        Lexicon {
            positive: POSITIVE_WORDS,
            negative: NEGATIVE_WORDS,
            suggest: SUGGEST_WORDS,
            particles: PARTICLES,
            endings: MEANINGLESS_ENDINGS,
            korean_stopwords: KOREAN_STOPWORDS.iter().copied().collect(),
            custom_stopwords: CUSTOM_STOPWORDS.iter().copied().collect(),
        }
    }

    /// Whether the word is in either stopword list.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.korean_stopwords.contains(word) || self.custom_stopwords.contains(word)
    }
}

static LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::build);

/// The process-wide lexicon.
pub fn lexicon() -> &'static Lexicon {
    &LEXICON
}
