//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::converter::Direction;

/// dubeol 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DubeolConfig {
    /// 방향 옵션이 없을 때 사용할 기본 변환 방향
    #[serde(default)]
    pub direction: Direction,
    /// 로그 필터 (`RUST_LOG`가 없을 때 사용)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for DubeolConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            log_filter: default_log_filter(),
        }
    }
}

/// 설정 파일 읽기/쓰기 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 실패
    Io(std::io::Error),
    /// JSON 직렬화/파싱 실패
    Parse(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::Parse(e) => write!(f, "설정 JSON 오류: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// 설정 파일 경로
///
/// `$XDG_CONFIG_HOME/dubeol/config.json`, 없으면 `$HOME/.config/dubeol/config.json`
pub fn config_path() -> PathBuf {
    let absolute_dir = |var: &str| {
        std::env::var(var)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };

    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    base.join("dubeol").join("config.json")
}

/// 설정 파일 로드
///
/// 파일이 없으면 기본값, 읽기/파싱 실패는 에러로 돌려줍니다.
/// 호출 측은 실패 시 기본값으로 계속 진행할 수 있습니다.
pub fn load_config() -> Result<DubeolConfig, ConfigError> {
    match read_config(&config_path()) {
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            Ok(DubeolConfig::default())
        }
        result => result,
    }
}

/// 지정한 경로에서 설정 읽기
pub fn read_config(path: &Path) -> Result<DubeolConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 설정 파일 저장
pub fn save_config(config: &DubeolConfig) -> Result<(), ConfigError> {
    write_config(&config_path(), config)
}

/// 지정한 경로에 설정 쓰기 (상위 디렉토리 자동 생성)
pub fn write_config(path: &Path, config: &DubeolConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DubeolConfig::default();
        assert_eq!(config.direction, Direction::RomanToHangul);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = DubeolConfig {
            direction: Direction::HangulToRoman,
            log_filter: "debug".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: DubeolConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 log_filter가 없는 경우 기본값 사용
        let json = r#"{"direction": "hangul_to_roman"}"#;
        let config: DubeolConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.direction, Direction::HangulToRoman);
        assert_eq!(config.log_filter, "warn");

        let config: DubeolConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DubeolConfig::default());
    }

    #[test]
    fn test_write_then_read() {
        let dir = std::env::temp_dir().join(format!("dubeol-config-test-{}", std::process::id()));
        let path = dir.join("nested").join("config.json");
        let config = DubeolConfig {
            direction: Direction::HangulToRoman,
            log_filter: "info".to_string(),
        };

        write_config(&path, &config).unwrap();
        assert_eq!(read_config(&path).unwrap(), config);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_errors() {
        let missing = std::env::temp_dir().join("dubeol-definitely-missing").join("config.json");
        assert!(matches!(read_config(&missing), Err(ConfigError::Io(_))));

        let dir = std::env::temp_dir().join(format!("dubeol-config-bad-{}", std::process::id()));
        let path = dir.join("config.json");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(read_config(&path), Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }
}
