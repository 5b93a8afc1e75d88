//! PC/모바일 신호 병합.
//!
//! 이 시스템의 비즈니스 로직이 있는 유일한 곳. 순수 함수이며 I/O가 없어
//! HTTP 계층과 무관하게 단위 테스트된다.

use chrono::Local;

use crate::models::status::{
    MergedStatus, MobileReport, RemoteDesktopStatus, PC_UNAVAILABLE, UNKNOWN_APP,
};

/// 응답 타임스탬프 포맷 (로컬 시간)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 현재 모바일 리포트와 원격 PC 상태를 하나의 병합 상태로 결합한다.
///
/// - `pc` — 원격 창 제목, `Unavailable`이면 `"unavailable"`
/// - `pc_process` — 원격 프로세스 이름, `Unavailable`이면 빈 문자열
/// - `mobile` — 리포트의 앱 이름 그대로
/// - `si` — 모바일이 `"unknown"` 센티널이고 원격이 `Unavailable`일 때만 true.
///   두 입력의 순수 함수이므로 요청마다 다시 계산되며 캐시되지 않는다.
/// - `timestamp` — 병합 시점의 현재 시각 (모바일 보고 시각이 아님)
pub fn merge(mobile: &MobileReport, remote: &RemoteDesktopStatus) -> MergedStatus {
    let (pc, pc_process) = match remote {
        RemoteDesktopStatus::Available {
            window_title,
            process_name,
        } => (window_title.clone(), process_name.clone()),
        RemoteDesktopStatus::Unavailable => (PC_UNAVAILABLE.to_string(), String::new()),
    };

    let si = mobile.app == UNKNOWN_APP && remote.is_unavailable();

    MergedStatus {
        pc,
        mobile: mobile.app.clone(),
        pc_process,
        si,
        timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        status: "ok".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn mobile(app: &str) -> MobileReport {
        MobileReport {
            app: app.to_string(),
            reported_at: Some(Local::now()),
        }
    }

    fn available(title: &str, process: &str) -> RemoteDesktopStatus {
        RemoteDesktopStatus::Available {
            window_title: title.to_string(),
            process_name: process.to_string(),
        }
    }

    #[test]
    fn maps_available_remote_verbatim() {
        let merged = merge(&mobile("Spotify"), &available("Editor", "code.exe"));
        assert_eq!(merged.pc, "Editor");
        assert_eq!(merged.pc_process, "code.exe");
        assert_eq!(merged.mobile, "Spotify");
        assert!(!merged.si);
        assert_eq!(merged.status, "ok");
    }

    #[test]
    fn maps_unavailable_remote_to_sentinels() {
        let merged = merge(&mobile("Spotify"), &RemoteDesktopStatus::Unavailable);
        assert_eq!(merged.pc, PC_UNAVAILABLE);
        assert_eq!(merged.pc_process, "");
    }

    #[test]
    fn si_truth_table() {
        // 유휴: 모바일 센티널 + 원격 불가일 때만 true
        let idle = merge(&MobileReport::default(), &RemoteDesktopStatus::Unavailable);
        assert!(idle.si);

        let mobile_active = merge(&mobile("Spotify"), &RemoteDesktopStatus::Unavailable);
        assert!(!mobile_active.si);

        let pc_active = merge(&MobileReport::default(), &available("Editor", "code.exe"));
        assert!(!pc_active.si);

        let both_active = merge(&mobile("Spotify"), &available("Editor", "code.exe"));
        assert!(!both_active.si);
    }

    #[test]
    fn si_holds_even_for_empty_remote_fields() {
        // 제공자가 빈 필드로 응답해도 "응답함"이므로 유휴가 아니다
        let merged = merge(&MobileReport::default(), &available("", ""));
        assert!(!merged.si);
        assert_eq!(merged.pc, "");
    }

    #[test]
    fn merge_is_pure_except_timestamp() {
        let m = mobile("Spotify");
        let r = available("Editor", "code.exe");
        let a = merge(&m, &r);
        let b = merge(&m, &r);
        assert_eq!(a.pc, b.pc);
        assert_eq!(a.mobile, b.mobile);
        assert_eq!(a.pc_process, b.pc_process);
        assert_eq!(a.si, b.si);
        assert_eq!(a.status, b.status);
    }

    #[test]
    fn timestamp_matches_contract_format() {
        let merged = merge(&MobileReport::default(), &RemoteDesktopStatus::Unavailable);
        assert!(
            chrono::NaiveDateTime::parse_from_str(&merged.timestamp, TIMESTAMP_FORMAT).is_ok(),
            "타임스탬프 포맷 불일치: {}",
            merged.timestamp
        );
    }
}
