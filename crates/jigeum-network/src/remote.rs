//! 원격 데스크톱 상태 클라이언트.
//!
//! 상태 요청마다 제공자에 `GET /` 한 번. 재시도 없음. 타임아웃은
//! reqwest 클라이언트 전체 요청 타임아웃으로 강제되므로, 원격이 TCP
//! 연결만 수락하고 응답하지 않아도 한계 내에 반환한다.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use jigeum_core::config::DesktopServiceConfig;
use jigeum_core::error::CoreError;
use jigeum_core::models::RemoteDesktopStatus;

/// 제공자 응답 와이어 포맷.
/// 필드 누락은 빈 문자열로 통일한다 (단일 정책).
#[derive(Debug, Deserialize)]
struct WindowInfoPayload {
    #[serde(default)]
    window_title: String,
    #[serde(default)]
    process_name: String,
}

/// 데스크톱 창 정보 제공자 폴링 클라이언트.
///
/// 요청별 상태가 없으므로 복제해서 핸들러마다 공유해도 된다.
#[derive(Debug, Clone)]
pub struct RemoteStatusClient {
    client: reqwest::Client,
    base_url: String,
    enabled: bool,
}

impl RemoteStatusClient {
    /// 명시적 URL과 타임아웃으로 클라이언트 생성
    pub fn new(base_url: &str, timeout: Duration, enabled: bool) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Config(format!("HTTP 클라이언트 빌드 실패: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            enabled,
        })
    }

    /// 설정에서 클라이언트 생성
    pub fn from_config(config: &DesktopServiceConfig) -> Result<Self, CoreError> {
        let base_url = format!("http://{}:{}", config.host, config.port);
        Self::new(&base_url, config.poll_timeout(), config.enabled)
    }

    /// 제공자 기본 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 제공자를 한 번 폴링한다.
    ///
    /// 통합 비활성화, 연결 실패, 타임아웃, 비정상 상태 코드, JSON 파싱
    /// 실패는 전부 `Unavailable`이다. 호출자에게 에러가 전파되는 경우는
    /// 없다.
    pub async fn poll(&self) -> RemoteDesktopStatus {
        if !self.enabled {
            debug!("데스크톱 폴링 비활성화됨, Unavailable 반환");
            return RemoteDesktopStatus::Unavailable;
        }

        let url = format!("{}/", self.base_url);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("데스크톱 제공자 연결 실패 ({}): {e}", self.base_url);
                return RemoteDesktopStatus::Unavailable;
            }
        };

        if !response.status().is_success() {
            warn!(
                "데스크톱 제공자 비정상 응답 ({}): {}",
                self.base_url,
                response.status()
            );
            return RemoteDesktopStatus::Unavailable;
        }

        match response.json::<WindowInfoPayload>().await {
            Ok(payload) => RemoteDesktopStatus::Available {
                window_title: payload.window_title,
                process_name: payload.process_name,
            },
            Err(e) => {
                warn!("데스크톱 제공자 응답 파싱 실패 ({}): {e}", self.base_url);
                RemoteDesktopStatus::Unavailable
            }
        }
    }
}
