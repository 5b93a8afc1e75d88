//! # jigeum-core
//!
//! JIGEUM 도메인 모델, 설정, 공유 상태 저장소, 상태 병합 로직.
//! 모든 크레이트가 공유하는 핵심 타입을 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (serde Serialize/Deserialize)
//! - [`store`] — 모바일 앱 리포트 공유 저장소 (동시 접근 안전)
//! - [`aggregate`] — PC/모바일 신호 병합 (순수 함수)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/기본값 생성)
//! - [`error`] — 핵심 에러 타입 (thiserror)

pub mod aggregate;
pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod store;
