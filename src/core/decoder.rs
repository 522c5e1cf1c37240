//! 영문 키 시퀀스 → 한글 변환 (두벌식 자판 기준)
//!
//! 키 시퀀스에는 음절 경계가 없으므로 한 글자씩 상태 기계로 읽는다.
//! 종성 후보 뒤에 모음이 오면 그 자음은 다음 글자의 초성이 된다.
//!
//! ```text
//! ExpectLead -> ExpectVowel -> ExpectTail -> ConfirmTail
//!     |              |              |              |
//!   낱모음/통과    낱자음       종성 없음      종성 확정/축소/포기
//! ```

use crate::core::tables::{lead_index, lead_jamo, tail_index, tail_jamo, vowel_index, vowel_jamo};
use crate::core::unicode::compose_syllable;

/// 파서 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 첫 키를 초성으로 읽는 중
    ExpectLead,
    /// 초성 확정, 중성 탐색
    ExpectVowel { lead: u32 },
    /// 초성+중성 확정, 종성 후보 탐색
    ExpectTail { lead: u32, vowel: u32, consumed: usize },
    /// 종성 후보 뒤에 모음이 오는지 확인
    ConfirmTail {
        lead: u32,
        vowel: u32,
        consumed: usize,
        tail: u32,
        tail_len: usize,
    },
}

/// 한 번의 파싱 결과: 소비한 키 수와 출력 문자
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    consumed: usize,
    output: char,
}

/// 영문 키 시퀀스를 한글 문자열로 변환
///
/// - 영문자(a-zA-Z)가 아닌 문자는 그대로 유지
/// - 모음이 따라오지 않는 자음은 낱자음으로 출력
/// - `allow_compound_isolated_consonant`가 true면 `rt` → ㄳ, `qt` → ㅄ 처럼
///   두 키로 된 겹자음을 하나의 낱자음으로 묶는다
///
/// # Examples
/// ```
/// use hantype::decode;
/// assert_eq!(decode("gksrmf", false), "한글");
/// assert_eq!(decode("rt", false), "ㄱㅅ");
/// assert_eq!(decode("rt", true), "ㄳ");
/// ```
pub fn decode(text: &str, allow_compound_isolated_consonant: bool) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut output = String::with_capacity(text.len() * 2);
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        if !c.is_ascii_alphabetic() {
            output.push(c);
            pos += 1;
            continue;
        }

        let step = next_step(&chars[pos..], allow_compound_isolated_consonant);
        output.push(step.output);
        pos += step.consumed;
    }

    output
}

/// `input[0]`이 영문자일 때 한 글자를 파싱
fn next_step(input: &[char], allow_compound: bool) -> Step {
    let first = input[0];
    let mut state = State::ExpectLead;

    loop {
        state = match state {
            State::ExpectLead => match key_at(input, 1).and_then(|k| lead_index(&k)) {
                Some(lead) => State::ExpectVowel { lead },
                None => return vowel_or_passthrough(first),
            },

            State::ExpectVowel { lead } => match longest_match(&input[1..], vowel_index) {
                Some((vowel, len)) => State::ExpectTail {
                    lead,
                    vowel,
                    consumed: 1 + len,
                },
                None => return isolated_consonant(input, lead, allow_compound),
            },

            State::ExpectTail {
                lead,
                vowel,
                consumed,
            } => match longest_match(&input[consumed..], tail_index) {
                Some((tail, tail_len)) => State::ConfirmTail {
                    lead,
                    vowel,
                    consumed,
                    tail,
                    tail_len,
                },
                None => return syllable(first, lead, vowel, 0, consumed),
            },

            State::ConfirmTail {
                lead,
                vowel,
                consumed,
                tail,
                tail_len,
            } => {
                let rest = &input[consumed..];
                if longest_match(&rest[tail_len..], vowel_index).is_none() {
                    return syllable(first, lead, vowel, tail, consumed + tail_len);
                }

                log::trace!(
                    "종성 후보 {:?}의 마지막 키는 다음 글자의 초성",
                    &rest[..tail_len]
                );

                // 겹받침이면 앞 자음만 남겨 다시 확인, 홑받침이면 종성 없음
                match (tail_len, key_at(rest, 1).and_then(|k| tail_index(&k))) {
                    (2, Some(short)) => State::ConfirmTail {
                        lead,
                        vowel,
                        consumed,
                        tail: short,
                        tail_len: 1,
                    },
                    _ => return syllable(first, lead, vowel, 0, consumed),
                }
            }
        };
    }
}

/// 앞에서부터 `len`개 키를 문자열로 (키가 모자라면 None)
fn key_at(input: &[char], len: usize) -> Option<String> {
    (input.len() >= len).then(|| input[..len].iter().collect())
}

/// 두 키 조합을 먼저, 없으면 한 키를 찾는다
fn longest_match(input: &[char], index: fn(&str) -> Option<u32>) -> Option<(u32, usize)> {
    [2, 1].into_iter().find_map(|len| {
        key_at(input, len)
            .and_then(|key| index(&key))
            .map(|idx| (idx, len))
    })
}

/// 완성형 음절 출력 (조합 실패 시 첫 키를 그대로 통과)
fn syllable(first: char, lead: u32, vowel: u32, tail: u32, consumed: usize) -> Step {
    match compose_syllable(lead, vowel, tail) {
        Some(output) => Step { consumed, output },
        None => Step {
            consumed: 1,
            output: first,
        },
    }
}

/// 모음이 따라오지 않는 초성 → 낱자음 (옵션에 따라 겹자음)
fn isolated_consonant(input: &[char], lead: u32, allow_compound: bool) -> Step {
    if allow_compound {
        let compound = key_at(input, 2)
            .and_then(|k| tail_index(&k))
            .and_then(tail_jamo);
        if let Some(output) = compound {
            return Step {
                consumed: 2,
                output,
            };
        }
    }

    Step {
        consumed: 1,
        output: lead_jamo(lead).unwrap_or(input[0]),
    }
}

/// 초성이 아닌 키: 단일 모음 키면 낱모음, 아니면 그대로
fn vowel_or_passthrough(c: char) -> Step {
    let mut buf = [0u8; 4];
    let output = vowel_index(c.encode_utf8(&mut buf))
        .and_then(vowel_jamo)
        .unwrap_or(c);
    Step {
        consumed: 1,
        output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(input: &str) -> String {
        decode(input, false)
    }

    #[test]
    fn test_basic_syllable() {
        assert_eq!(convert("rk"), "가");
        assert_eq!(convert("sk"), "나");
        assert_eq!(convert("rkskek"), "가나다");
    }

    #[test]
    fn test_with_jongseong() {
        assert_eq!(convert("rkr"), "각");
        assert_eq!(convert("rks"), "간");
        assert_eq!(convert("gks"), "한");
    }

    #[test]
    fn test_jongseong_to_next_choseong() {
        assert_eq!(convert("rksk"), "가나");
        assert_eq!(convert("dkswl"), "안지");
        assert_eq!(convert("rkrkrl"), "가가기");
    }

    #[test]
    fn test_complex_jungseong() {
        assert_eq!(convert("dhk"), "와");
        assert_eq!(convert("dnj"), "워");
        assert_eq!(convert("dml"), "의");
        assert_eq!(convert("dhksfy"), "완료");
    }

    #[test]
    fn test_complex_jongseong() {
        assert_eq!(convert("dlfr"), "읽");
        assert_eq!(convert("djqt"), "없");
    }

    #[test]
    fn test_complex_jongseong_split() {
        // ㄺ 뒤에 모음 → ㄹ은 종성, ㄱ은 다음 초성
        assert_eq!(convert("dlfrdj"), "읽어");
        assert_eq!(convert("dlfrk"), "일가");
        assert_eq!(convert("djqtdj"), "없어");
    }

    #[test]
    fn test_double_consonant() {
        assert_eq!(convert("Rk"), "까");
        assert_eq!(convert("Tks"), "싼");
        assert_eq!(convert("dlT"), "있");
        // ㄸ은 종성이 될 수 없으므로 다음 글자로
        assert_eq!(convert("rkEk"), "가따");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(convert("123"), "123");
        assert_eq!(convert("rk!sk"), "가!나");
        assert_eq!(convert("rk sk"), "가 나");
        assert_eq!(convert("X"), "X");
        assert_eq!(convert("rkXsk"), "가X나");
        // ASCII가 아닌 라틴 문자는 키로 읽지 않는다
        assert_eq!(convert("rké"), "가é");
        assert_eq!(convert("ａrk"), "ａ가");
    }

    #[test]
    fn test_consonant_only() {
        assert_eq!(convert("r"), "ㄱ");
        assert_eq!(convert("rs"), "ㄱㄴ");
        assert_eq!(convert("E"), "ㄸ");
    }

    #[test]
    fn test_vowel_only() {
        assert_eq!(convert("k"), "ㅏ");
        assert_eq!(convert("kh"), "ㅏㅗ");
        // 낱모음은 복합 모음으로 묶지 않는다
        assert_eq!(convert("hk"), "ㅗㅏ");
    }

    #[test]
    fn test_compound_isolated_consonant() {
        assert_eq!(decode("rt", true), "ㄳ");
        assert_eq!(decode("qt", true), "ㅄ");
        assert_eq!(decode("fg", true), "ㅀ");
        assert_eq!(decode("rt", false), "ㄱㅅ");
        // 겹자음이 아닌 조합은 그대로 낱자음
        assert_eq!(decode("rs", true), "ㄱㄴ");
        // 모음이 따라오면 음절이 우선
        assert_eq!(decode("rtk", false), "ㄱ사");
        assert_eq!(decode("rk", true), "가");
    }

    #[test]
    fn test_truncated_tail() {
        assert_eq!(convert("gksr"), "한ㄱ");
        assert_eq!(convert("gks "), "한 ");
    }

    #[test]
    fn test_empty() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_next_step_consumed() {
        let input: Vec<char> = "gksrmf".chars().collect();
        assert_eq!(
            next_step(&input, false),
            Step {
                consumed: 3,
                output: '한'
            }
        );
        assert_eq!(
            next_step(&input[3..], false),
            Step {
                consumed: 3,
                output: '글'
            }
        );
    }
}
