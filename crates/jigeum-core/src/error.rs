//! JIGEUM 핵심 에러 타입.
//!
//! 시작 시점(설정 로드)에만 발생하는 에러를 정의한다.
//! 원격 폴링 실패는 에러가 아니라 `RemoteDesktopStatus::Unavailable`이라는
//! 데이터로 표현되므로 여기에 등장하지 않는다.

use thiserror::Error;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// YAML 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// 파일 입출력 실패
    #[error("입출력 에러: {0}")]
    Io(#[from] std::io::Error),
}
