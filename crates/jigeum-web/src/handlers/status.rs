//! 병합 상태 핸들러.
//!
//! `GET /` — 원격 폴링(자체 타임아웃으로 한정) → 저장소 스냅샷 → 병합
//! → 직렬화. 전송 계층에서는 항상 200이다: "데이터 없음"도 유효한
//! 페이로드이지 전송 에러가 아니다.

use axum::extract::State;
use axum::Json;
use tracing::info;

use jigeum_core::aggregate;
use jigeum_core::models::MergedStatus;

use crate::AppState;

/// 병합 상태 조회
pub async fn get_status(State(state): State<AppState>) -> Json<MergedStatus> {
    let remote = state.remote.poll().await;
    let mobile = state.store.snapshot();

    let merged = aggregate::merge(&mobile, &remote);

    // 운영 가시성용 로그 — 응답 내용에는 영향 없음
    info!(
        "[상태] PC 창: {} | 모바일 앱: {} | si: {}",
        merged.pc, merged.mobile, merged.si
    );

    Json(merged)
}
