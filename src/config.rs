//! 변환 옵션 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// 변환 옵션
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    /// 영문 → 한글 변환 시 두 키 겹자음(ㄳ, ㅄ 등)을 하나의 낱자음으로 묶을지 여부
    #[serde(default = "default_allow_compound_consonant")]
    pub allow_compound_consonant: bool,
    /// 완성도 검사 시 자음만 있는 낱자모를 허용할지 여부
    #[serde(default = "default_allow_bare_consonant")]
    pub allow_bare_consonant: bool,
}

fn default_allow_compound_consonant() -> bool {
    false
}

fn default_allow_bare_consonant() -> bool {
    true
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            allow_compound_consonant: default_allow_compound_consonant(),
            allow_bare_consonant: default_allow_bare_consonant(),
        }
    }
}

impl ConvertOptions {
    /// 겹자음 묶기 설정
    pub fn with_compound_consonant(mut self, allow: bool) -> Self {
        self.allow_compound_consonant = allow;
        self
    }

    /// 낱자음 허용 설정
    pub fn with_bare_consonant(mut self, allow: bool) -> Self {
        self.allow_bare_consonant = allow;
        self
    }
}

/// 설정 파일 로드/저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::Parse(s) => write!(f, "설정 JSON 오류: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// JSON 문자열에서 옵션 파싱 (누락된 필드는 기본값)
pub fn parse_config(json: &str) -> Result<ConvertOptions, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// 설정 파일 로드
pub fn load_config(path: &Path) -> Result<ConvertOptions, ConfigError> {
    let content = fs::read_to_string(path)?;
    let options = parse_config(&content)?;
    log::debug!("설정 로드: {} {:?}", path.display(), options);
    Ok(options)
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_or_default(path: &Path) -> ConvertOptions {
    load_config(path).unwrap_or_else(|e| {
        log::warn!("{} - 기본 설정 사용", e);
        ConvertOptions::default()
    })
}

/// 설정 파일 저장
pub fn save_config(path: &Path, options: &ConvertOptions) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(options).map_err(|e| ConfigError::Parse(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let options = ConvertOptions::default();
        assert!(!options.allow_compound_consonant);
        assert!(options.allow_bare_consonant);
    }

    #[test]
    fn test_serialize_deserialize() {
        let options = ConvertOptions::default()
            .with_compound_consonant(true)
            .with_bare_consonant(false);
        let json = serde_json::to_string(&options).unwrap();
        let parsed = parse_config(&json).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let options = parse_config(r#"{"allow_compound_consonant": true}"#).unwrap();
        assert!(options.allow_compound_consonant);
        assert!(options.allow_bare_consonant);

        let options = parse_config("{}").unwrap();
        assert_eq!(options, ConvertOptions::default());
    }

    #[test]
    fn test_parse_error() {
        let result = parse_config("not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("hantype-config-{}", std::process::id()));
        let path = dir.join("config.json");
        let options = ConvertOptions::default().with_compound_consonant(true);

        save_config(&path, &options).unwrap();
        assert_eq!(load_config(&path).unwrap(), options);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("hantype-does-not-exist/config.json");
        assert!(matches!(load_config(&path), Err(ConfigError::Io(_))));
        assert_eq!(load_config_or_default(&path), ConvertOptions::default());
    }
}
