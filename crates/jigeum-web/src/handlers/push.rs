//! 모바일 푸시 핸들러.
//!
//! `POST /` — 모바일 단말의 포그라운드 앱 보고를 받아 저장소에 기록한다.
//! 파싱과 인메모리 갱신 외에는 아무것도 하지 않는다 — 이 경로에
//! 네트워크 호출은 없다.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::AppState;

/// 푸시 요청 본문
#[derive(Debug, Deserialize)]
pub struct PushRequest {
    /// 포그라운드 앱 이름
    pub app: String,
    /// 공유 비밀 토큰 (설정에 토큰이 없으면 무시)
    #[serde(default)]
    pub token: Option<String>,
}

/// 푸시 성공 응답
#[derive(Debug, Serialize)]
pub struct PushAck {
    /// 항상 `"ok"`
    pub status: &'static str,
    /// 수신 확인 (`received <app>`)
    pub message: String,
}

/// 앱 보고 수신.
///
/// `Json` 추출기 대신 원문을 직접 파싱한다 — 400 본문이 계약 형식
/// (`{"status":"error","message":...}`)으로 파싱 사유를 담아야 하기
/// 때문이다. 토큰 불일치는 저장소를 건드리지 않고 401로 끝난다.
pub async fn receive_push(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<PushAck>, ApiError> {
    let request: PushRequest =
        serde_json::from_str(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if !state.token.is_empty() {
        let provided = request.token.as_deref().unwrap_or("");
        if provided != state.token {
            warn!("[모바일] 토큰 검증 실패: 수신='{provided}'");
            return Err(ApiError::Unauthorized);
        }
    }

    state.store.update(&request.app);
    info!("[모바일] 앱 정보 수신: {}", request.app);

    Ok(Json(PushAck {
        status: "ok",
        message: format!("received {}", request.app),
    }))
}
