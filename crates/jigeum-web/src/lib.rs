//! # jigeum-web
//!
//! 두 개의 HTTP 리스너.
//!
//! - 푸시 리스너 (기본 5202) — 모바일 앱 보고 수신, 토큰 검증
//! - 상태 리스너 (기본 5203) — 원격 폴링 + 저장소 스냅샷 병합 제공,
//!   설정에 따라 HTTPS (인증서 로드 실패 시 HTTP로 폴백)
//!
//! 두 리스너는 [`MobileStatusStore`]만 공유한다. CORS와 토큰 검증은
//! 복사된 분기가 아니라 레이어/핸들러 단위의 직교 정책이다.
//!
//! [`MobileStatusStore`]: jigeum_core::store::MobileStatusStore

pub mod error;
pub mod handlers;

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use jigeum_core::config::StatusListenConfig;
use jigeum_core::store::MobileStatusStore;
use jigeum_network::RemoteStatusClient;

/// 리스너 공유 상태
#[derive(Clone)]
pub struct AppState {
    /// 모바일 리포트 저장소 (유일한 공유 가변 자원)
    pub store: MobileStatusStore,
    /// 원격 데스크톱 폴링 클라이언트 (요청별 상태 없음)
    pub remote: RemoteStatusClient,
    /// 설정된 푸시 토큰. 빈 문자열이면 인증 생략
    pub token: String,
}

impl AppState {
    /// 새 공유 상태 생성
    pub fn new(store: MobileStatusStore, remote: RemoteStatusClient, token: String) -> Self {
        Self {
            store,
            remote,
            token,
        }
    }

    /// 테스트용 상태 — 원격 폴링 비활성, 새 저장소
    #[cfg(test)]
    pub(crate) fn for_test(token: &str) -> Self {
        use std::time::Duration;

        let remote =
            RemoteStatusClient::new("http://127.0.0.1:1", Duration::from_millis(100), false)
                .unwrap();
        Self::new(MobileStatusStore::new(), remote, token.to_string())
    }
}

/// 모든 오리진을 허용하는 CORS 레이어.
/// 프리플라이트 `OPTIONS`는 레이어가 본문 없이 응답한다.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// 푸시 리스너 라우터 (`POST /`)
pub fn push_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(handlers::push::receive_push))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 상태 리스너 라우터 (`GET /`)
pub fn status_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status::get_status))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 모바일 푸시 리스너 서버
pub struct PushServer {
    port: u16,
    state: AppState,
}

impl PushServer {
    /// 새 푸시 서버 생성
    pub fn new(port: u16, state: AppState) -> Self {
        Self { port, state }
    }

    /// 서버 실행. 바인드 실패는 복구 불가이므로 그대로 반환한다.
    pub async fn run(self, shutdown_rx: watch::Receiver<bool>) -> Result<(), std::io::Error> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = TcpListener::bind(addr).await?;
        info!("모바일 푸시 리스너 시작: http://{addr}");

        axum::serve(listener, push_router(self.state))
            .with_graceful_shutdown(wait_for_shutdown(shutdown_rx))
            .await?;

        info!("모바일 푸시 리스너 종료");
        Ok(())
    }
}

/// 병합 상태 제공 서버
pub struct StatusServer {
    config: StatusListenConfig,
    state: AppState,
}

impl StatusServer {
    /// 새 상태 서버 생성
    pub fn new(config: StatusListenConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// 서버 실행.
    ///
    /// `enable_https`가 켜져 있으면 인증서/키 로드를 시도하고, 실패하면
    /// 경고를 남기고 평문 HTTP로 동작한다. 바인드 실패는 복구 불가로
    /// 그대로 반환한다.
    pub async fn run(self, shutdown_rx: watch::Receiver<bool>) -> Result<(), std::io::Error> {
        let StatusServer { config, state } = self;
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let app = status_router(state);

        if config.enable_https {
            match axum_server::tls_rustls::RustlsConfig::from_pem_file(
                &config.ssl_certfile,
                &config.ssl_keyfile,
            )
            .await
            {
                Ok(tls) => {
                    info!("상태 리스너 시작 (HTTPS): https://{addr}");
                    return run_tls(addr, app, tls, shutdown_rx).await;
                }
                Err(e) => {
                    warn!(
                        "인증서 로드 실패 (cert={}, key={}): {e}, HTTP로 폴백",
                        config.ssl_certfile.display(),
                        config.ssl_keyfile.display()
                    );
                }
            }
        }

        let listener = TcpListener::bind(addr).await?;
        info!("상태 리스너 시작 (HTTP): http://{addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(wait_for_shutdown(shutdown_rx))
            .await?;

        info!("상태 리스너 종료");
        Ok(())
    }
}

/// HTTPS로 상태 리스너 실행
async fn run_tls(
    addr: SocketAddr,
    app: Router,
    tls: axum_server::tls_rustls::RustlsConfig,
    shutdown_rx: watch::Receiver<bool>,
) -> Result<(), std::io::Error> {
    let handle = axum_server::Handle::new();

    let shutdown_handle = handle.clone();
    tokio::spawn(async move {
        wait_for_shutdown(shutdown_rx).await;
        shutdown_handle.graceful_shutdown(None);
    });

    axum_server::bind_rustls(addr, tls)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    info!("상태 리스너 종료");
    Ok(())
}

/// 종료 신호 대기
async fn wait_for_shutdown(mut shutdown_rx: watch::Receiver<bool>) {
    loop {
        if *shutdown_rx.borrow() {
            info!("리스너 종료 신호 수신");
            break;
        }
        if shutdown_rx.changed().await.is_err() {
            break;
        }
    }
}
