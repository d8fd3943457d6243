//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// hymnbook 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HymnbookConfig {
    /// 카탈로그 JSON 경로
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,
    /// YouTube 색인 JSON 경로
    #[serde(default = "default_youtube_index_path")]
    pub youtube_index_path: PathBuf,
    /// 북마크/최근 본 목록 저장 경로
    #[serde(default = "default_library_path")]
    pub library_path: PathBuf,
    /// 종류 무관 노출 쿨다운 (초)
    #[serde(default = "default_global_cooldown_secs")]
    pub global_cooldown_secs: u64,
    /// 앱 시작 노출 최소 간격 (초)
    #[serde(default = "default_app_open_cooldown_secs")]
    pub app_open_cooldown_secs: u64,
    /// 전면 노출 최소 간격 (초)
    #[serde(default = "default_interstitial_cooldown_secs")]
    pub interstitial_cooldown_secs: u64,
}

fn default_catalog_path() -> PathBuf {
    data_dir().join("catalog.json")
}

fn default_youtube_index_path() -> PathBuf {
    data_dir().join("oldHymns.json")
}

fn default_library_path() -> PathBuf {
    data_dir().join("library.json")
}

fn default_global_cooldown_secs() -> u64 {
    180
}

fn default_app_open_cooldown_secs() -> u64 {
    90
}

fn default_interstitial_cooldown_secs() -> u64 {
    120
}

impl Default for HymnbookConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            youtube_index_path: default_youtube_index_path(),
            library_path: default_library_path(),
            global_cooldown_secs: default_global_cooldown_secs(),
            app_open_cooldown_secs: default_app_open_cooldown_secs(),
            interstitial_cooldown_secs: default_interstitial_cooldown_secs(),
        }
    }
}

fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        })
}

/// 데이터 디렉토리: ~/.local/share/hymnbook
pub fn data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join("hymnbook")
}

/// 설정 파일 경로: ~/.config/hymnbook/config.json
pub fn config_path() -> PathBuf {
    home_dir().join(".config").join("hymnbook").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> HymnbookConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            HymnbookConfig::default()
        }),
        Err(_) => HymnbookConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &HymnbookConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HymnbookConfig::default();
        assert_eq!(config.global_cooldown_secs, 180);
        assert_eq!(config.app_open_cooldown_secs, 90);
        assert_eq!(config.interstitial_cooldown_secs, 120);
        assert!(config.catalog_path.ends_with("hymnbook/catalog.json"));
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = HymnbookConfig {
            global_cooldown_secs: 45,
            catalog_path: PathBuf::from("/srv/hymns/catalog.json"),
            ..HymnbookConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: HymnbookConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_unknown_field_ignored() {
        // 더 이상 쓰지 않는 필드가 남아 있어도 로드 가능
        let json = r#"{"search_debounce_ms": 300, "interstitial_cooldown_secs": 60}"#;
        let config: HymnbookConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.interstitial_cooldown_secs, 60);
        let expected = HymnbookConfig {
            interstitial_cooldown_secs: 60,
            ..HymnbookConfig::default()
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 일부 필드만 있는 경우 나머지는 기본값 사용
        let json = r#"{"global_cooldown_secs": 30}"#;
        let config: HymnbookConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.global_cooldown_secs, 30);
        assert_eq!(config.app_open_cooldown_secs, 90);
        assert_eq!(config.library_path, default_library_path());
    }
}
