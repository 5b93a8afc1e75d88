//! 설정 파일 관리.
//!
//! `config.yml`을 로드하고, 파일이 없으면 주석이 달린 기본 템플릿을
//! 생성해 저장한다. 읽기/파싱 실패는 경고 후 하드코딩 기본값으로
//! 계속한다 — 설정 문제로 프로세스를 중단하지 않는다.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::StatusConfig;
use crate::error::CoreError;

/// 기본 설정 파일 이름
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// 새 설치에 기록되는 기본 설정 템플릿.
/// `StatusConfig::default()`와 항상 일치해야 한다.
const DEFAULT_CONFIG_TEMPLATE: &str = "\
# JIGEUM 설정 파일
# 데스크톱 창 정보 제공자 (별도 프로세스) 폴링
desktop:
  enabled: true
  host: 127.0.0.1
  port: 5201
  # 폴링 타임아웃 (밀리초)
  poll_timeout_ms: 5000

# 모바일 푸시 리스너
mobile:
  enabled: true
  port: 5202
  # 공유 비밀 토큰 (빈 값이면 인증 생략)
  token: \"\"

# 상태 엔드포인트
status:
  port: 5203
  enable_https: false
  ssl_certfile: ./cert.pem
  ssl_keyfile: ./key.pem
";

/// 설정 관리자.
///
/// 로드된 설정과 그 출처 경로를 보관한다. 설정은 시작 시 한 번 읽는
/// 읽기 전용 값이다.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: StatusConfig,
    config_path: PathBuf,
}

impl ConfigManager {
    /// 경로에서 설정을 로드하거나 기본 템플릿을 생성한다.
    ///
    /// - 파일 있음 + 파싱 성공 → 파일 내용 사용
    /// - 파일 없음 → 기본 템플릿 기록 후 기본값 사용
    /// - 읽기/파싱/기록 실패 → 경고 로그 후 기본값 사용
    pub fn init(config_path: impl Into<PathBuf>) -> Self {
        let config_path = config_path.into();

        let config = if config_path.exists() {
            match Self::load_from_file(&config_path) {
                Ok(config) => {
                    info!("설정 파일 로드: {}", config_path.display());
                    config
                }
                Err(e) => {
                    warn!("설정 파일 로드 실패 ({}): {e}, 기본값 사용", config_path.display());
                    StatusConfig::default()
                }
            }
        } else {
            match Self::write_default_template(&config_path) {
                Ok(()) => info!("기본 설정 파일 생성: {}", config_path.display()),
                Err(e) => warn!("기본 설정 파일 생성 실패 ({}): {e}, 기본값 사용", config_path.display()),
            }
            StatusConfig::default()
        };

        Self {
            config,
            config_path,
        }
    }

    /// 현재 설정 반환 (복제본)
    pub fn get(&self) -> StatusConfig {
        self.config.clone()
    }

    /// 설정 파일 경로 반환
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 파일에서 설정 로드
    fn load_from_file(path: &Path) -> Result<StatusConfig, CoreError> {
        let content = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// 기본 템플릿 기록
    fn write_default_template(path: &Path) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_to_defaults() {
        let parsed: StatusConfig = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(parsed, StatusConfig::default());
    }

    #[test]
    fn absent_file_materializes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let manager = ConfigManager::init(&path);

        assert!(path.exists(), "기본 템플릿이 기록되어야 함");
        assert_eq!(manager.get(), StatusConfig::default());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("poll_timeout_ms"));
    }

    #[test]
    fn existing_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "mobile:\n  token: secret\n  port: 6000\n").unwrap();

        let manager = ConfigManager::init(&path);

        let config = manager.get();
        assert_eq!(config.mobile.token, "secret");
        assert_eq!(config.mobile.port, 6000);
        assert_eq!(config.status.port, 5203);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, ":: not yaml ::\n- [").unwrap();

        let manager = ConfigManager::init(&path);

        assert_eq!(manager.get(), StatusConfig::default());
        // 실패한 파일을 덮어쓰지 않는다
        assert_eq!(fs::read_to_string(&path).unwrap(), ":: not yaml ::\n- [");
    }
}
