//! 초성(choseong) 검색 매칭
//!
//! 한글 문자열을 초성 문자열로 바꾸고, 초성 쿼리가 본문과 맞는지 판정합니다.
//!
//! 두 가지 매칭 방식이 있습니다:
//!
//! 1. **느슨한 매칭** ([`matches_initials_loose`]): 양쪽의 공백을 모두 제거한 뒤 포함 여부 검사
//! 2. **단어 경계 매칭** ([`matches_initial_tokens`]): 공백으로 나눈 토큰 시퀀스가 연속으로 등장하는지 검사
//!
//! ```
//! use hymnbook::core::initials::{compact_initials, initials_with_spaces};
//!
//! assert_eq!(initials_with_spaces("사랑 하는  나의"), "ㅅㄹ ㅎㄴ ㄴㅇ");
//! assert_eq!(compact_initials("사랑 하는 나의"), "ㅅㄹㅎㄴㄴㅇ");
//! ```

use unicode_normalization::UnicodeNormalization;

use super::unicode::{initial_of, is_choseong_jamo};

/// `char::is_whitespace` 외에 명시적으로 제거하는 공백 문자
/// (NBSP, EN SPACE, EM SPACE, THIN SPACE, 전각 공백)
const EXTRA_SPACES: [char; 5] = ['\u{00A0}', '\u{2002}', '\u{2003}', '\u{2009}', '\u{3000}'];

/// 한글 문자열 -> 초성 문자열 (공백은 한 칸으로 압축하여 보존)
///
/// 입력은 먼저 NFC로 정규화되므로 분해된 자모 시퀀스도 음절로 취급됩니다.
/// 한글 음절이 아닌 문자는 그대로 유지됩니다.
pub fn initials_with_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfc() {
        if let Some(initial) = initial_of(c) {
            out.push(initial);
        } else if c.is_whitespace() {
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    squeeze_spaces(&out)
}

/// 초성 문자열에서 모든 공백을 제거한 버전
pub fn compact_initials(text: &str) -> String {
    remove_all_spaces(&initials_with_spaces(text))
}

/// 모든 종류의 공백 제거 (일반/줄바꿈/넓은 공백 포함)
pub fn remove_all_spaces(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && !EXTRA_SPACES.contains(c))
        .collect()
}

/// 연속 공백을 1칸으로 압축하고 앞뒤 공백 제거
pub fn squeeze_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 쿼리가 초성으로만 이루어졌는지 (공백 허용)
pub fn is_initials_query(query: &str) -> bool {
    let trimmed = query.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_whitespace() || is_choseong_jamo(c))
}

/// 쿼리가 ASCII 숫자(0-9)로만 이루어졌는지 (앞뒤 공백 무시)
pub fn is_numeric_query(query: &str) -> bool {
    let trimmed = query.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// 공백 기준 초성 토큰 목록
fn initial_tokens(text: &str) -> Vec<String> {
    initials_with_spaces(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// 단어 경계 매칭: 쿼리 초성 토큰들이 본문 초성 토큰 시퀀스에 **연속**으로 등장하는지
///
/// - 토큰이 하나면 본문 토큰 중 하나와 정확히 같아야 함
/// - 토큰이 여럿이면 같은 길이의 연속 구간에서 위치별로 본문 토큰이 쿼리 토큰을 포함해야 함
///
/// ```
/// use hymnbook::core::initials::matches_initial_tokens;
///
/// assert!(matches_initial_tokens("ㅅㄹ ㅎㄴ", "사랑 하는 나의 어린양"));
/// assert!(matches_initial_tokens("ㅅ ㅎ", "사랑 하는 나의 어린양"));
/// assert!(matches_initial_tokens("ㅅㄹ", "사랑 하는 나의 어린양"));
/// assert!(!matches_initial_tokens("ㅅ", "사랑 하는 나의 어린양"));
/// ```
pub fn matches_initial_tokens(query: &str, haystack: &str) -> bool {
    let query_tokens = initial_tokens(query);
    if query_tokens.is_empty() {
        return false;
    }

    let hay_tokens = initial_tokens(haystack);
    if query_tokens.len() > hay_tokens.len() {
        return false;
    }

    // 단일 토큰은 완전 일치 (부분 포함 아님)
    if query_tokens.len() == 1 {
        return hay_tokens.contains(&query_tokens[0]);
    }

    // 슬라이딩 윈도우: 위치별 포함 검사
    hay_tokens.windows(query_tokens.len()).any(|window| {
        window
            .iter()
            .zip(&query_tokens)
            .all(|(hay, q)| hay.contains(q.as_str()))
    })
}

/// 느슨한 매칭: 공백을 모두 제거한 초성 문자열끼리 포함 검사 (대소문자 무시)
pub fn matches_initials_loose(query: &str, haystack: &str) -> bool {
    let needle = compact_initials(query).to_lowercase();
    compact_initials(haystack).to_lowercase().contains(&needle)
}
