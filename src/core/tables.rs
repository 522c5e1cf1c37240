//! 두벌식 자판 키 ↔ 자모 인덱스 테이블
//!
//! 정방향 테이블은 상수 배열, 역방향 맵(키 → 인덱스)은 최초 사용 시
//! 한 번만 생성되며 이후 읽기 전용이다.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// 초성(19) 키
/// ㄱ ㄲ ㄴ ㄷ ㄸ ㄹ ㅁ ㅂ ㅃ ㅅ ㅆ ㅇ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ ㅎ
#[rustfmt::skip]
pub const LEAD_KEYS: [&str; 19] = [
    "r", "R", "s", "e", "E",
    "f", "a", "q", "Q", "t",
    "T", "d", "w", "W", "c",
    "z", "x", "v", "g",
];

/// 중성(21) 키 - 복합 모음은 두 키
/// ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ ㅗ ㅘ ㅙ ㅚ ㅛ ㅜ ㅝ ㅞ ㅟ ㅠ ㅡ ㅢ ㅣ
#[rustfmt::skip]
pub const VOWEL_KEYS: [&str; 21] = [
    "k",  "o",  "i", "O", "j",
    "p",  "u",  "P", "h", "hk",
    "ho", "hl", "y", "n", "nj",
    "np", "nl", "b", "m", "ml",
    "l",
];

/// 종성(1+27) 키 - 0번은 종성 없음
/// 없음 ㄱ ㄲ ㄳ ㄴ ㄵ ㄶ ㄷ ㄹ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅁ ㅂ ㅄ ㅅ ㅆ ㅇ ㅈ ㅊ ㅋ ㅌ ㅍ ㅎ
#[rustfmt::skip]
pub const TAIL_KEYS: [&str; 28] = [
    "",   "r",  "R",  "rt", "s",
    "sw", "sg", "e",  "f",  "fr",
    "fa", "fq", "ft", "fx", "fv",
    "fg", "a",  "q",  "qt", "t",
    "T",  "d",  "w",  "c",  "z",
    "x",  "v",  "g",
];

/// 낱자음(30) 키 - 호환용 자모 ㄱ(U+3131) ~ ㅎ(U+314E) 순서
/// ㄱ ㄲ ㄳ ㄴ ㄵ ㄶ ㄷ ㄸ ㄹ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅁ ㅂ ㅃ ㅄ ㅅ ㅆ ㅇ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ ㅎ
#[rustfmt::skip]
pub const ISOLATED_CONSONANT_KEYS: [&str; 30] = [
    "r",  "R",  "rt", "s",  "sw",
    "sg", "e",  "E",  "f",  "fr",
    "fa", "fq", "ft", "fx", "fv",
    "fg", "a",  "q",  "Q",  "qt",
    "t",  "T",  "d",  "w",  "W",
    "c",  "z",  "x",  "v",  "g",
];

/// 초성 인덱스 → 호환용 자모
#[rustfmt::skip]
pub const LEAD_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ',
    'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 인덱스 → 호환용 자모
#[rustfmt::skip]
pub const VOWEL_JAMO: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ',
    'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ',
    'ㅣ',
];

/// 종성 인덱스 → 호환용 자모 (0번은 종성 없음이라 출력하지 않는다)
#[rustfmt::skip]
pub const TAIL_JAMO: [char; 28] = [
    '\0', 'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ',
    'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ',
    'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ',
    'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

fn reverse_map(keys: &[&'static str]) -> HashMap<&'static str, u32> {
    keys.iter()
        .enumerate()
        .filter(|(_, key)| !key.is_empty())
        .map(|(idx, key)| (*key, idx as u32))
        .collect()
}

lazy_static! {
    static ref LEAD_INDEX: HashMap<&'static str, u32> = reverse_map(&LEAD_KEYS);
    static ref VOWEL_INDEX: HashMap<&'static str, u32> = reverse_map(&VOWEL_KEYS);
    // 종성 없음("")은 키로 조회되지 않도록 제외
    static ref TAIL_INDEX: HashMap<&'static str, u32> = reverse_map(&TAIL_KEYS);
}

/// 키 → 초성 인덱스
pub fn lead_index(key: &str) -> Option<u32> {
    LEAD_INDEX.get(key).copied()
}

/// 키 → 중성 인덱스
pub fn vowel_index(key: &str) -> Option<u32> {
    VOWEL_INDEX.get(key).copied()
}

/// 키 → 종성 인덱스 (0번은 반환되지 않음)
pub fn tail_index(key: &str) -> Option<u32> {
    TAIL_INDEX.get(key).copied()
}

pub fn lead_key(idx: u32) -> Option<&'static str> {
    LEAD_KEYS.get(idx as usize).copied()
}

pub fn vowel_key(idx: u32) -> Option<&'static str> {
    VOWEL_KEYS.get(idx as usize).copied()
}

/// 종성 인덱스 → 키 (0번은 빈 문자열)
pub fn tail_key(idx: u32) -> Option<&'static str> {
    TAIL_KEYS.get(idx as usize).copied()
}

/// 낱자음 영역 내 위치 → 키
pub fn isolated_consonant_key(offset: usize) -> Option<&'static str> {
    ISOLATED_CONSONANT_KEYS.get(offset).copied()
}

pub fn lead_jamo(idx: u32) -> Option<char> {
    LEAD_JAMO.get(idx as usize).copied()
}

pub fn vowel_jamo(idx: u32) -> Option<char> {
    VOWEL_JAMO.get(idx as usize).copied()
}

/// 종성 인덱스 → 호환용 자모 (종성 없음은 None)
pub fn tail_jamo(idx: u32) -> Option<char> {
    if idx == 0 {
        return None;
    }
    TAIL_JAMO.get(idx as usize).copied()
}
