//! 검색 쿼리 분류 및 카탈로그 필터링
//!
//! 쿼리는 다음 순서로 분류되어 처리됩니다:
//!
//! 1. **숫자**: 곡 번호의 10진 문자열에 쿼리가 포함되는지
//! 2. **초성**: 쿼리에 공백이 있으면 단어 경계 매칭, 없으면 공백 무시 매칭
//! 3. **일반 텍스트**: 제목 또는 본문에 대소문자 무시 부분 일치
//!
//! 숫자/일반 텍스트 결과는 번호순입니다. 초성 결과는 [`SearchScope::TitleThenWords`]
//! 일 때 제목 일치를 먼저, 그 다음 번호순으로 정렬합니다.

use crate::core::initials::{
    is_initials_query, is_numeric_query, matches_initial_tokens, matches_initials_loose,
};

/// 검색 대상 레코드
pub trait Searchable {
    /// 레코드 번호 (장 번호)
    fn number(&self) -> u32;
    /// 제목
    fn title(&self) -> &str;
    /// 본문 (가사/교독문)
    fn words(&self) -> &str;
}

/// 쿼리 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// 빈 쿼리 (전체 목록)
    Empty,
    /// 숫자만 있는 쿼리
    Numeric,
    /// 공백이 있는 초성 쿼리 (단어 경계 매칭)
    InitialsStrict,
    /// 공백이 없는 초성 쿼리 (공백 무시 매칭)
    InitialsLoose,
    /// 일반 텍스트
    Text,
}

impl QueryKind {
    /// 쿼리 분류 (숫자 검사가 초성 검사보다 우선)
    pub fn classify(query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            QueryKind::Empty
        } else if is_numeric_query(query) {
            QueryKind::Numeric
        } else if is_initials_query(query) {
            if query.chars().any(char::is_whitespace) {
                QueryKind::InitialsStrict
            } else {
                QueryKind::InitialsLoose
            }
        } else {
            QueryKind::Text
        }
    }
}

/// 초성 검색 시 검사할 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// 본문만 검사 (찬송가)
    #[default]
    Words,
    /// 제목 먼저, 없으면 본문 (교독문)
    TitleThenWords,
}

/// 일치한 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    /// 빈 쿼리로 전체 선택됨
    Any,
    /// 번호 일치
    Number,
    /// 제목 일치
    Title,
    /// 본문 일치
    Words,
}

impl MatchField {
    /// 정렬 순위 (제목 일치 0, 본문 일치 1)
    pub fn rank(self) -> u8 {
        match self {
            MatchField::Words => 1,
            _ => 0,
        }
    }
}

/// 검색 결과 한 건
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a, T> {
    pub record: &'a T,
    pub field: MatchField,
}

impl<T: Searchable> SearchHit<'_, T> {
    pub fn number(&self) -> u32 {
        self.record.number()
    }
}

/// 레코드 목록에서 쿼리와 일치하는 항목 검색
pub fn search<'a, T: Searchable>(
    records: &'a [T],
    query: &str,
    scope: SearchScope,
) -> Vec<SearchHit<'a, T>> {
    let query = query.trim();
    let kind = QueryKind::classify(query);

    let mut hits: Vec<SearchHit<'a, T>> = records
        .iter()
        .filter_map(|record| {
            match_field(record, query, kind, scope).map(|field| SearchHit { record, field })
        })
        .collect();

    let ranked = matches!(kind, QueryKind::InitialsStrict | QueryKind::InitialsLoose)
        && scope == SearchScope::TitleThenWords;
    if ranked {
        hits.sort_by_key(|hit| (hit.field.rank(), hit.number()));
    } else {
        hits.sort_by_key(|hit| hit.number());
    }

    log::debug!("검색 '{}' ({:?}, {:?}): {}건", query, kind, scope, hits.len());
    hits
}

/// 레코드 하나에 대해 일치 필드 판정
fn match_field<T: Searchable>(
    record: &T,
    query: &str,
    kind: QueryKind,
    scope: SearchScope,
) -> Option<MatchField> {
    match kind {
        QueryKind::Empty => Some(MatchField::Any),
        QueryKind::Numeric => record
            .number()
            .to_string()
            .contains(query)
            .then_some(MatchField::Number),
        QueryKind::InitialsStrict => {
            match_initials(record, scope, |hay| matches_initial_tokens(query, hay))
        }
        QueryKind::InitialsLoose => {
            match_initials(record, scope, |hay| matches_initials_loose(query, hay))
        }
        QueryKind::Text => {
            let needle = query.to_lowercase();
            if record.title().to_lowercase().contains(&needle) {
                Some(MatchField::Title)
            } else if record.words().to_lowercase().contains(&needle) {
                Some(MatchField::Words)
            } else {
                None
            }
        }
    }
}

fn match_initials<T, F>(record: &T, scope: SearchScope, matches: F) -> Option<MatchField>
where
    T: Searchable,
    F: Fn(&str) -> bool,
{
    if scope == SearchScope::TitleThenWords && matches(record.title()) {
        return Some(MatchField::Title);
    }
    matches(record.words()).then_some(MatchField::Words)
}
