//! 유니코드 한글 음절 분해 및 초성 테이블

use lazy_static::lazy_static;
use std::collections::HashSet;

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 테이블 (호환용 자모), 초성 인덱스 순서
#[rustfmt::skip]
pub const CHOSEONG_TABLE: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

lazy_static! {
    static ref CHOSEONG_SET: HashSet<char> = CHOSEONG_TABLE.iter().copied().collect();
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_complete_hangul(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성 인덱스에 해당하는 자모 문자 반환
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_TABLE.get(cho as usize).copied()
}

/// 완성형 한글의 초성 자모 반환
///
/// 인덱스는 `(코드포인트 - 0xAC00) / (21 * 28)`
pub fn initial_of(c: char) -> Option<char> {
    if !is_complete_hangul(c) {
        return None;
    }
    let index = (c as u32 - HANGUL_SYLLABLE_BASE) / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    choseong_to_jamo_char(index)
}

/// 초성 테이블 19자 중 하나인지 확인 (ㄳ 같은 겹자음, 모음은 제외)
pub fn is_choseong_jamo(c: char) -> bool {
    CHOSEONG_SET.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
    /// - choseong: 초성 인덱스 (0~18)
    /// - jungseong: 중성 인덱스 (0~20)
    /// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
    fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
        if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
            return None;
        }
        let code = HANGUL_SYLLABLE_BASE
            + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
            + jongseong;
        char::from_u32(code)
    }

    #[test]
    fn test_compose_syllable() {
        // 가 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 없음(0)
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        // 한 = 초성 ㅎ(18) + 중성 ㅏ(0) + 종성 ㄴ(4)
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        assert_eq!(compose_syllable(19, 0, 0), None);
        assert_eq!(compose_syllable(0, 21, 0), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));

        // 한글이 아닌 문자
        assert_eq!(decompose_syllable('a'), None);
        assert_eq!(decompose_syllable('ㄱ'), None);
    }

    #[test]
    fn test_initial_matches_table_for_every_syllable() {
        for code in HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST {
            let c = char::from_u32(code).unwrap();
            let (cho, jung, jong) = decompose_syllable(c).unwrap();
            assert_eq!(compose_syllable(cho, jung, jong), Some(c));

            let index = (code - HANGUL_SYLLABLE_BASE) / (21 * 28);
            assert_eq!(cho, index);
            assert_eq!(initial_of(c), Some(CHOSEONG_TABLE[index as usize]));
        }
    }

    #[test]
    fn test_initial_of() {
        assert_eq!(initial_of('사'), Some('ㅅ'));
        assert_eq!(initial_of('랑'), Some('ㄹ'));
        assert_eq!(initial_of('까'), Some('ㄲ'));
        assert_eq!(initial_of('x'), None);
    }

    #[test]
    fn test_is_choseong_jamo() {
        assert!(is_choseong_jamo('ㄱ'));
        assert!(is_choseong_jamo('ㅎ'));
        assert!(is_choseong_jamo('ㅉ'));
        // 겹받침, 모음, 완성형은 초성이 아님
        assert!(!is_choseong_jamo('ㄳ'));
        assert!(!is_choseong_jamo('ㅏ'));
        assert!(!is_choseong_jamo('가'));
    }

    #[test]
    fn test_choseong_to_jamo_char() {
        assert_eq!(choseong_to_jamo_char(0), Some('ㄱ'));
        assert_eq!(choseong_to_jamo_char(18), Some('ㅎ'));
        assert_eq!(choseong_to_jamo_char(19), None);
    }
}
