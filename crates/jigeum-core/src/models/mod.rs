//! 도메인 데이터 모델.

pub mod status;

pub use status::{MergedStatus, MobileReport, RemoteDesktopStatus};
