//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::recognition::StabilizerConfig;

/// Suhwa 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SuhwaConfig {
    /// 레이블 확정에 필요한 연속 동일 예측 수
    #[serde(default = "default_rec_history_len")]
    pub rec_history_len: usize,
    /// 레이블 확정 후 다음 확정까지 대기 시간 (ms)
    #[serde(default = "default_rec_cool_time_ms")]
    pub rec_cool_time_ms: u64,
}

fn default_rec_history_len() -> usize {
    5
}

fn default_rec_cool_time_ms() -> u64 {
    3000
}

impl Default for SuhwaConfig {
    fn default() -> Self {
        Self {
            rec_history_len: default_rec_history_len(),
            rec_cool_time_ms: default_rec_cool_time_ms(),
        }
    }
}

impl SuhwaConfig {
    /// 레이블 안정화 설정으로 변환
    pub fn stabilizer(&self) -> StabilizerConfig {
        StabilizerConfig {
            history_len: self.rec_history_len,
            cooldown: Duration::from_millis(self.rec_cool_time_ms),
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/suhwa/config.json (없으면 ~/.config)
pub fn config_path() -> PathBuf {
    let absolute_dir = |var: &str| {
        std::env::var(var)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };
    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("suhwa").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> SuhwaConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 파일 로드
pub fn load_config_from(path: &Path) -> SuhwaConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            SuhwaConfig::default()
        }),
        Err(_) => SuhwaConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &SuhwaConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 파일 저장
pub fn save_config_to(config: &SuhwaConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("suhwa-test-{}-{}", std::process::id(), name))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = SuhwaConfig::default();
        assert_eq!(config.rec_history_len, 5);
        assert_eq!(config.rec_cool_time_ms, 3000);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = SuhwaConfig {
            rec_history_len: 7,
            rec_cool_time_ms: 1500,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SuhwaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        let json = r#"{"rec_cool_time_ms": 1000}"#;
        let config: SuhwaConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.rec_history_len, 5);
        assert_eq!(config.rec_cool_time_ms, 1000);
    }

    #[test]
    fn test_stabilizer_conversion() {
        let config = SuhwaConfig {
            rec_history_len: 3,
            rec_cool_time_ms: 250,
        };
        let s = config.stabilizer();
        assert_eq!(s.history_len, 3);
        assert_eq!(s.cooldown, Duration::from_millis(250));
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("save");
        let config = SuhwaConfig {
            rec_history_len: 4,
            rec_cool_time_ms: 2000,
        };
        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_or_malformed() {
        let path = temp_path("malformed");
        assert_eq!(load_config_from(&path), SuhwaConfig::default());

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_from(&path), SuhwaConfig::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_config_path_file_name() {
        let path = config_path();
        assert!(path.ends_with("suhwa/config.json"));
    }
}
