//! 유니코드 한글 조합/분해 유틸리티

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

/// 호환용 자모 자음 영역 (ㄱ ~ ㅎ, 30자)
const ISOLATED_CONSONANT_FIRST: u32 = 0x3131;
const ISOLATED_CONSONANT_LAST: u32 = 0x314E;
/// 호환용 자모 모음 영역 (ㅏ ~ ㅣ, 21자)
const ISOLATED_VOWEL_FIRST: u32 = 0x314F;
const ISOLATED_VOWEL_LAST: u32 = 0x3163;

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    let jungseong = (offset % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT;
    let jongseong = offset % JONGSEONG_COUNT;
    Some((choseong, jungseong, jongseong))
}

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 낱자음이면 자음 영역 내 위치 반환 (ㄱ = 0, ㅎ = 29)
pub fn isolated_consonant_offset(c: char) -> Option<usize> {
    let cp = c as u32;
    (ISOLATED_CONSONANT_FIRST..=ISOLATED_CONSONANT_LAST)
        .contains(&cp)
        .then(|| (cp - ISOLATED_CONSONANT_FIRST) as usize)
}

/// 낱모음이면 모음 영역 내 위치 반환 (ㅏ = 0, ㅣ = 20)
/// 위치는 중성 인덱스와 같다
pub fn isolated_vowel_offset(c: char) -> Option<usize> {
    let cp = c as u32;
    (ISOLATED_VOWEL_FIRST..=ISOLATED_VOWEL_LAST)
        .contains(&cp)
        .then(|| (cp - ISOLATED_VOWEL_FIRST) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose() {
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        assert_eq!(compose_syllable(18, 20, 27), Some('힣'));
    }

    #[test]
    fn test_compose_out_of_range() {
        assert_eq!(compose_syllable(19, 0, 0), None);
        assert_eq!(compose_syllable(0, 21, 0), None);
        assert_eq!(compose_syllable(0, 0, 28), None);
    }

    #[test]
    fn test_decompose() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('글'), Some((0, 18, 8)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));
        assert_eq!(decompose_syllable('ㄱ'), None);
        assert_eq!(decompose_syllable('a'), None);
    }

    #[test]
    fn test_syllable_block_bounds() {
        assert!(is_syllable('\u{AC00}'));
        assert!(is_syllable('\u{D7A3}'));
        assert!(!is_syllable('\u{D7A4}'));
        assert!(!is_syllable('\u{ABFF}'));
    }

    #[test]
    fn test_compose_decompose_every_syllable() {
        for code in HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST {
            let c = char::from_u32(code).unwrap();
            let (cho, jung, jong) = decompose_syllable(c).unwrap();
            assert_eq!(compose_syllable(cho, jung, jong), Some(c));
        }
    }

    #[test]
    fn test_isolated_ranges() {
        assert_eq!(isolated_consonant_offset('ㄱ'), Some(0));
        assert_eq!(isolated_consonant_offset('ㄳ'), Some(2));
        assert_eq!(isolated_consonant_offset('ㅎ'), Some(29));
        assert_eq!(isolated_consonant_offset('ㅏ'), None);

        assert_eq!(isolated_vowel_offset('ㅏ'), Some(0));
        assert_eq!(isolated_vowel_offset('ㅘ'), Some(9));
        assert_eq!(isolated_vowel_offset('ㅣ'), Some(20));
        assert_eq!(isolated_vowel_offset('ㅎ'), None);
        assert_eq!(isolated_vowel_offset('가'), None);
    }
}
