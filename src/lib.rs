pub mod config;
pub mod core;
pub mod detection;

pub use config::{ConfigError, ConvertOptions};
pub use crate::core::converter::Converter;
pub use crate::core::decoder::decode;
pub use crate::core::encoder::encode;
pub use crate::core::separator::separate;
pub use detection::{has_incomplete_jamo, is_valid_complete_hangul, HangulReport};
