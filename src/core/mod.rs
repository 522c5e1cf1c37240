//! 두벌식 자판 한글 ↔ 영문 키 변환 핵심 로직

pub mod converter;
pub mod decoder;
pub mod encoder;
pub mod separator;
pub mod tables;
pub mod unicode;
