//! 모바일 앱 리포트 공유 저장소.
//!
//! 전역 변수가 아니라 명시적으로 주입되는 소유 객체다.
//! 푸시 핸들러 여러 개가 동시에 쓰고 상태 핸들러 여러 개가 동시에 읽어도
//! 찢어진 리포트(새 앱 이름 + 이전 타임스탬프)가 노출되지 않는다.

use std::sync::Arc;

use chrono::Local;
use parking_lot::RwLock;

use crate::models::status::MobileReport;

/// 마지막 모바일 리포트의 스레드 안전 저장소.
///
/// `Clone`은 동일한 내부 상태를 공유한다 — 푸시 리스너와 상태 리스너에
/// 각각 복제본을 넘기면 된다.
#[derive(Debug, Clone, Default)]
pub struct MobileStatusStore {
    inner: Arc<RwLock<MobileReport>>,
}

impl MobileStatusStore {
    /// 기본 리포트(`"unknown"`, 타임스탬프 없음)로 저장소 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 리포트를 덮어쓰고 현재 시각을 기록한다. 항상 성공한다.
    ///
    /// 리포트는 값 하나로 통째로 교체된다 — 필드 단위 갱신이 아니므로
    /// 동시 스냅샷이 반쯤 쓰인 리포트를 볼 수 없다.
    pub fn update(&self, app: &str) {
        let report = MobileReport {
            app: app.to_string(),
            reported_at: Some(Local::now()),
        };
        *self.inner.write() = report;
    }

    /// 현재 리포트의 값 복사본을 반환한다. 네트워크 I/O 없음.
    pub fn snapshot(&self) -> MobileReport {
        self.inner.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::UNKNOWN_APP;

    #[test]
    fn starts_with_default_report() {
        let store = MobileStatusStore::new();
        let report = store.snapshot();
        assert_eq!(report.app, UNKNOWN_APP);
        assert!(report.reported_at.is_none());
    }

    #[test]
    fn update_then_snapshot_returns_app_with_timestamp() {
        let store = MobileStatusStore::new();
        let before = Local::now();

        store.update("Spotify");

        let report = store.snapshot();
        assert_eq!(report.app, "Spotify");
        let reported_at = report.reported_at.expect("타임스탬프 누락");
        assert!(reported_at >= before);
    }

    #[test]
    fn update_overwrites_previous_report() {
        let store = MobileStatusStore::new();
        store.update("Spotify");
        store.update("YouTube");
        assert_eq!(store.snapshot().app, "YouTube");
    }

    #[test]
    fn clones_share_state() {
        let store = MobileStatusStore::new();
        let clone = store.clone();
        store.update("Spotify");
        assert_eq!(clone.snapshot().app, "Spotify");
    }

    #[test]
    fn concurrent_updates_never_tear() {
        let store = MobileStatusStore::new();
        let names: Vec<String> = (0..16).map(|i| format!("app-{i}")).collect();

        let handles: Vec<_> = names
            .iter()
            .cloned()
            .map(|name| {
                let store = store.clone();
                std::thread::spawn(move || store.update(&name))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // 정확히 N개 이름 중 하나가, 자기 자신의 타임스탬프와 함께 남는다
        let report = store.snapshot();
        assert!(names.contains(&report.app), "알 수 없는 앱: {}", report.app);
        assert!(report.reported_at.is_some());
    }
}
