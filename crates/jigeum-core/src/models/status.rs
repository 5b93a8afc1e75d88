//! 상태 도메인 모델.
//!
//! 모바일 리포트, 원격 PC 상태, 병합 결과의 세 가지 타입을 정의한다.
//! 센티널 정책: 모바일 무데이터는 `"unknown"`, PC 무데이터는 `"unavailable"`,
//! 유휴 플래그 필드명은 `si`. 어디서나 이 한 가지 표기만 사용한다.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// 푸시가 한 번도 없었을 때의 모바일 앱 센티널
pub const UNKNOWN_APP: &str = "unknown";

/// 원격 PC 상태를 가져오지 못했을 때의 창 제목 센티널
pub const PC_UNAVAILABLE: &str = "unavailable";

/// 모바일 단말이 마지막으로 보고한 포그라운드 앱.
///
/// [`MobileStatusStore`](crate::store::MobileStatusStore)가 단독 소유하며,
/// 항상 값 전체가 한 번에 교체된다 — 새 앱 이름과 이전 타임스탬프가
/// 섞인 리포트는 존재할 수 없다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileReport {
    /// 앱 이름 (푸시된 값 그대로)
    pub app: String,
    /// 보고 시각. 첫 푸시 전에는 `None`
    pub reported_at: Option<DateTime<Local>>,
}

impl Default for MobileReport {
    fn default() -> Self {
        Self {
            app: UNKNOWN_APP.to_string(),
            reported_at: None,
        }
    }
}

/// 원격 데스크톱 상태 — 폴링 한 번마다 새로 생성되며 저장되지 않는다.
///
/// 네트워크 실패를 암묵적으로 삼키는 대신 `Unavailable` 변형으로
/// 명시한다. 호출자가 실패를 실제 데이터로 오인할 수 없다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteDesktopStatus {
    /// 제공자 응답 수신 성공
    Available {
        /// 전경 창 제목 (제공자 필드 누락 시 빈 문자열)
        window_title: String,
        /// 전경 프로세스 이름 (제공자 필드 누락 시 빈 문자열)
        process_name: String,
    },
    /// 연결 불가, 타임아웃, 비정상 응답, 또는 통합 비활성화
    Unavailable,
}

impl RemoteDesktopStatus {
    /// 상태를 가져오지 못했는지 여부
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RemoteDesktopStatus::Unavailable)
    }
}

/// 상태 엔드포인트의 응답 계약.
///
/// 상태 요청마다 [`aggregate::merge`](crate::aggregate::merge)가 새로
/// 계산하며 어디에도 저장되지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedStatus {
    /// PC 전경 창 제목, 가져오지 못하면 `"unavailable"`
    pub pc: String,
    /// 모바일 앱 이름 (센티널 `"unknown"` 포함 그대로)
    pub mobile: String,
    /// PC 전경 프로세스 이름, 가져오지 못하면 빈 문자열
    pub pc_process: String,
    /// 유휴 플래그 — 두 신호원 모두 보고할 활동이 없을 때만 true
    pub si: bool,
    /// 병합 시각 (`%Y-%m-%d %H:%M:%S`, 로컬 시간)
    pub timestamp: String,
    /// 항상 `"ok"` — "데이터 없음"도 정상 페이로드다
    pub status: String,
}
