//! 한글 완성도 검증 모듈
//!
//! 낱자모 검출 및 완성형 한글 여부 판별

use crate::core::unicode::{is_syllable, isolated_consonant_offset, isolated_vowel_offset};

/// 문자열의 한글이 모두 완성된 글자인지 검사
///
/// - 완성형 한글: 통과
/// - 낱자음: `allow_bare_consonant`가 true일 때만 통과
/// - 낱모음: 항상 실패
/// - 한글이 아닌 문자: 통과 (한글 영역만 검사)
///
/// # Examples
/// ```
/// use hantype::is_valid_complete_hangul;
/// assert!(is_valid_complete_hangul("한글", true));
/// assert!(is_valid_complete_hangul("ㄱ", true));
/// assert!(!is_valid_complete_hangul("ㄱ", false));
/// assert!(!is_valid_complete_hangul("ㅏ", true));
/// ```
pub fn is_valid_complete_hangul(text: &str, allow_bare_consonant: bool) -> bool {
    text.chars().all(|ch| {
        if isolated_consonant_offset(ch).is_some() {
            allow_bare_consonant
        } else {
            // 낱모음은 어떤 경우에도 불완전
            isolated_vowel_offset(ch).is_none()
        }
    })
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(ch: char) -> bool {
    is_syllable(ch)
}

/// 완성형 한글이 아닌 낱자모가 포함되어 있는지 검사
///
/// 호환용 자모 자음(ㄱ-ㅎ)과 모음(ㅏ-ㅣ) 영역만 본다
pub fn has_incomplete_jamo(text: &str) -> bool {
    text.chars()
        .any(|ch| isolated_consonant_offset(ch).is_some() || isolated_vowel_offset(ch).is_some())
}

/// 한글 완성도 검사 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HangulReport {
    /// 완성형 한글 글자 수
    pub syllables: usize,
    /// 낱자모 포함 여부
    pub incomplete_jamo: bool,
    /// `is_valid_complete_hangul` 판정
    pub valid: bool,
}

impl HangulReport {
    pub fn new(text: &str, allow_bare_consonant: bool) -> Self {
        Self {
            syllables: text.chars().filter(|ch| is_complete_hangul(*ch)).count(),
            incomplete_jamo: has_incomplete_jamo(text),
            valid: is_valid_complete_hangul(text, allow_bare_consonant),
        }
    }
}
