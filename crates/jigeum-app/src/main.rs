//! # jigeum-app
//!
//! JIGEUM 서버 바이너리 진입점.
//! 설정 로드, 컴포넌트 조립, 두 리스너의 라이프사이클 관리.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

use jigeum_core::config_manager::ConfigManager;
use jigeum_core::store::MobileStatusStore;
use jigeum_network::RemoteStatusClient;
use jigeum_web::{AppState, PushServer, StatusServer};

/// PC·모바일 현재 상태 통합 서버
///
/// 데스크톱 창 정보 제공자를 폴링하고 모바일 푸시를 받아
/// 하나의 병합 상태를 HTTP로 제공한다.
#[derive(Parser, Debug)]
#[command(name = "jigeum")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로
    #[arg(long, short = 'c', default_value = "./config.yml")]
    config: PathBuf,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG가 있으면 우선, 없으면 CLI 인자
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ConfigManager::init(&args.config).get();

    info!("PC·모바일 상태 동기화 서버 시작");

    // 조립: 저장소 하나를 두 리스너가 공유한다
    let store = MobileStatusStore::new();
    let remote = RemoteStatusClient::from_config(&config.desktop)
        .context("원격 상태 클라이언트 생성 실패")?;
    if config.desktop.enabled {
        info!("데스크톱 제공자 폴링 대상: {}", remote.base_url());
    } else {
        info!("데스크톱 제공자 폴링 비활성화됨");
    }
    let state = AppState::new(store, remote, config.mobile.token.clone());

    // Ctrl-C → 종료 신호 브로드캐스트
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let ctrlc_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("종료 신호(Ctrl-C) 수신");
            let _ = ctrlc_tx.send(true);
        }
    });

    // 푸시 리스너 (설정으로 끌 수 있음)
    let push_task = if config.mobile.enabled {
        let server = PushServer::new(config.mobile.port, state.clone());
        let rx = shutdown_rx.clone();
        Some(tokio::spawn(async move { server.run(rx).await }))
    } else {
        info!("모바일 푸시 리스너 비활성화됨");
        None
    };

    // 상태 리스너는 포그라운드에서 실행. 어느 쪽이든 바인드 실패는
    // 복구 불가 — 에러 메시지와 함께 비정상 종료한다.
    let status_server = StatusServer::new(config.status.clone(), state);
    let result = match push_task {
        Some(push_task) => {
            tokio::select! {
                result = status_server.run(shutdown_rx.clone()) => {
                    result.context("상태 리스너 실패")
                }
                result = push_task => {
                    result.context("푸시 리스너 태스크 중단")?
                        .context("푸시 리스너 실패")
                }
            }
        }
        None => status_server
            .run(shutdown_rx.clone())
            .await
            .context("상태 리스너 실패"),
    };

    // 남은 리스너도 내려가도록 신호를 보낸다
    let _ = shutdown_tx.send(true);

    result?;
    info!("서버 종료");
    Ok(())
}
