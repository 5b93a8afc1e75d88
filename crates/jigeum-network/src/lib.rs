//! # jigeum-network
//!
//! 데스크톱 창 정보 제공자를 폴링하는 HTTP 클라이언트.
//! 모든 실패는 에러가 아니라 [`RemoteDesktopStatus::Unavailable`]로
//! 귀결된다 — 원격 불가는 이 시스템에서 흔하고 정상적인 상태다.
//!
//! [`RemoteDesktopStatus::Unavailable`]: jigeum_core::models::RemoteDesktopStatus::Unavailable

pub mod remote;

pub use remote::RemoteStatusClient;
