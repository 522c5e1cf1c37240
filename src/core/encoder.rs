//! 한글 → 영문 키 시퀀스 변환 (두벌식 자판 기준)
//!
//! 완성형 한글은 초성/중성/종성 키를 이어 붙이고,
//! 낱자음/낱모음은 해당 키로, 그 외 문자는 그대로 출력한다.

use crate::core::tables::{isolated_consonant_key, lead_key, tail_key, vowel_key};
use crate::core::unicode::{decompose_syllable, isolated_consonant_offset, isolated_vowel_offset};

/// 한글 문자열을 두벌식 영문 키 시퀀스로 변환
///
/// # Examples
/// ```
/// use hantype::encode;
/// assert_eq!(encode("영어로"), "duddjfh");
/// assert_eq!(encode("한글"), "gksrmf");
/// assert_eq!(encode("ㄱㅅ ㅏ!"), "rt k!");
/// ```
pub fn encode(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if let Some((cho, jung, jong)) = decompose_syllable(c) {
            push_syllable_keys(cho, jung, jong, &mut result);
        } else if let Some(key) = isolated_consonant_offset(c).and_then(isolated_consonant_key) {
            result.push_str(key);
        } else if let Some(key) = isolated_vowel_offset(c).and_then(|o| vowel_key(o as u32)) {
            result.push_str(key);
        } else {
            // 한글이 아닌 문자는 그대로 유지
            result.push(c);
        }
    }

    result
}

/// 초성 + 중성 (+ 종성) 키 추가
fn push_syllable_keys(cho: u32, jung: u32, jong: u32, result: &mut String) {
    if let Some(key) = lead_key(cho) {
        result.push_str(key);
    }
    if let Some(key) = vowel_key(jung) {
        result.push_str(key);
    }
    // 종성 없음(0)은 빈 문자열
    if let Some(key) = tail_key(jong) {
        result.push_str(key);
    }
}
