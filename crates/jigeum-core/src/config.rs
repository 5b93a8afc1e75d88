//! 애플리케이션 설정 구조체.
//!
//! 원격 데스크톱 제공자 연결, 두 리스너 포트, 푸시 토큰, HTTPS 토글을
//! 정의한다. `config.yml`에서 serde_yaml로 로드되며, 모든 섹션과 필드는
//! `#[serde(default)]`로 누락을 허용한다.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusConfig {
    /// 데스크톱 창 정보 제공자 폴링 설정
    #[serde(default)]
    pub desktop: DesktopServiceConfig,
    /// 모바일 푸시 리스너 설정
    #[serde(default)]
    pub mobile: MobileListenConfig,
    /// 상태 엔드포인트 설정
    #[serde(default)]
    pub status: StatusListenConfig,
}

/// 데스크톱 창 정보 제공자 폴링 설정.
///
/// 제공자는 별도 프로세스로, `GET /`에 `{window_title, process_name}`을
/// 반환한다. 여기서는 소비만 한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopServiceConfig {
    /// 폴링 활성화 여부. false면 네트워크 호출 없이 항상 Unavailable
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// 제공자 호스트
    #[serde(default = "default_desktop_host")]
    pub host: String,
    /// 제공자 포트
    #[serde(default = "default_desktop_port")]
    pub port: u16,
    /// 폴링 타임아웃 (밀리초). 연결 수락 후 무응답인 경우에도 적용
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
}

impl Default for DesktopServiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: default_desktop_host(),
            port: default_desktop_port(),
            poll_timeout_ms: default_poll_timeout_ms(),
        }
    }
}

impl DesktopServiceConfig {
    /// 폴링 타임아웃을 Duration으로 반환
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }
}

/// 모바일 푸시 리스너 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobileListenConfig {
    /// 푸시 리스너 활성화 여부
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// 푸시 리스너 포트
    #[serde(default = "default_mobile_port")]
    pub port: u16,
    /// 공유 비밀 토큰. 빈 문자열이면 인증 생략
    #[serde(default)]
    pub token: String,
}

impl Default for MobileListenConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: default_mobile_port(),
            token: String::new(),
        }
    }
}

impl MobileListenConfig {
    /// 토큰 검증이 필요한지 여부
    pub fn requires_token(&self) -> bool {
        !self.token.is_empty()
    }
}

/// 상태 엔드포인트 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusListenConfig {
    /// 상태 엔드포인트 포트
    #[serde(default = "default_status_port")]
    pub port: u16,
    /// HTTPS 활성화 여부. 인증서 로드 실패 시 경고 후 HTTP로 동작
    #[serde(default)]
    pub enable_https: bool,
    /// SSL 인증서 파일 경로 (PEM)
    #[serde(default = "default_certfile")]
    pub ssl_certfile: PathBuf,
    /// SSL 개인 키 파일 경로 (PEM)
    #[serde(default = "default_keyfile")]
    pub ssl_keyfile: PathBuf,
}

impl Default for StatusListenConfig {
    fn default() -> Self {
        Self {
            port: default_status_port(),
            enable_https: false,
            ssl_certfile: default_certfile(),
            ssl_keyfile: default_keyfile(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_desktop_host() -> String {
    "127.0.0.1".to_string()
}

fn default_desktop_port() -> u16 {
    5201
}

fn default_poll_timeout_ms() -> u64 {
    5000
}

fn default_mobile_port() -> u16 {
    5202
}

fn default_status_port() -> u16 {
    5203
}

fn default_certfile() -> PathBuf {
    PathBuf::from("./cert.pem")
}

fn default_keyfile() -> PathBuf {
    PathBuf::from("./key.pem")
}
