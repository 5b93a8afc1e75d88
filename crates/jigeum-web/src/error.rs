//! API 에러 처리.
//!
//! 에러 본문은 푸시 엔드포인트 계약을 따른다:
//! `{"status":"error","message":"<사유>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// API 에러
#[derive(Debug, Error)]
pub enum ApiError {
    /// 본문 파싱 실패 또는 필수 필드 누락 — 사유를 그대로 전달
    #[error("{0}")]
    BadRequest(String),

    /// 푸시 토큰 불일치
    #[error("invalid token")]
    Unauthorized,
}

/// 에러 응답 본문
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// 항상 `"error"`
    pub status: &'static str,
    /// 사람이 읽을 사유
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        let body = ErrorResponse {
            status: "error",
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
