//! 한글 ↔ 영문 키 통합 변환기
//!
//! 옵션을 한 번 정해 두고 네 가지 변환/검사를 같은 설정으로 호출한다.

use crate::config::ConvertOptions;
use crate::core::decoder::decode;
use crate::core::encoder::encode;
use crate::core::separator::separate;
use crate::detection::validator::{is_valid_complete_hangul, HangulReport};

/// 설정을 가진 변환기
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// 한글 → 영문 키
    pub fn encode(&self, text: &str) -> String {
        encode(text)
    }

    /// 영문 키 → 한글 (`allow_compound_consonant` 적용)
    pub fn decode(&self, text: &str) -> String {
        decode(text, self.options.allow_compound_consonant)
    }

    /// 완성형 한글 → 자모
    pub fn separate(&self, text: &str) -> String {
        separate(text)
    }

    /// 완성도 검사 (`allow_bare_consonant` 적용)
    pub fn is_valid(&self, text: &str) -> bool {
        is_valid_complete_hangul(text, self.options.allow_bare_consonant)
    }

    /// 완성도 검사 상세 결과 (`allow_bare_consonant` 적용)
    pub fn report(&self, text: &str) -> HangulReport {
        HangulReport::new(text, self.options.allow_bare_consonant)
    }
}
