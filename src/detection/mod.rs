//! 한글 완성도 검사 모듈

pub mod validator;

pub use validator::{has_incomplete_jamo, is_complete_hangul, is_valid_complete_hangul, HangulReport};
