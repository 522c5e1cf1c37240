//! 완성형 한글 → 호환용 자모 분리

use crate::core::tables::{lead_jamo, tail_jamo, vowel_jamo};
use crate::core::unicode::decompose_syllable;

/// 완성형 음절을 초성/중성/종성 자모로 풀어 쓴다
/// 낱자모와 한글이 아닌 문자는 그대로 유지
///
/// ```
/// assert_eq!(hantype::separate("간"), "ㄱㅏㄴ");
/// ```
pub fn separate(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 3);

    for c in text.chars() {
        match decompose_syllable(c) {
            Some((cho, jung, jong)) => {
                result.extend(lead_jamo(cho));
                result.extend(vowel_jamo(jung));
                result.extend(tail_jamo(jong));
            }
            None => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separate_syllables() {
        assert_eq!(separate("간"), "ㄱㅏㄴ");
        assert_eq!(separate("가"), "ㄱㅏ");
        assert_eq!(separate("한글"), "ㅎㅏㄴㄱㅡㄹ");
        assert_eq!(separate("읽"), "ㅇㅣㄺ");
        assert_eq!(separate("왜"), "ㅇㅙ");
    }

    #[test]
    fn test_separate_passthrough() {
        assert_eq!(separate("ㄱㅏ"), "ㄱㅏ");
        assert_eq!(separate("abc 123!"), "abc 123!");
        assert_eq!(separate(""), "");
        assert_eq!(separate("음하하?!"), "ㅇㅡㅁㅎㅏㅎㅏ?!");
    }
}
