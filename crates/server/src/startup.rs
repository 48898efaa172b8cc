use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// State for the configured store mode.
/// - `store.seed = true`：预置示例数据，启动后列表非空
/// - `store.seed = false`：空存储
pub fn build_state(cfg: &AppConfig) -> ServerState {
    if cfg.store.seed {
        ServerState::seeded()
    } else {
        ServerState::empty()
    }
}

/// Router with the default CORS and trace layers.
pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: ServerState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(state);
    // 收到 shutdown 信号后停止接收新连接，等待进行中的请求完成
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    // 无法注册 Ctrl+C 监听时不退出，保持服务运行直到进程被终止
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C; shutdown only on process exit");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: bind the configured address and serve until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    // 每个存储各自持有一把锁，state 显式传给路由
    let state = build_state(&cfg);
    let addr: SocketAddr = cfg.bind_addr().parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, seeded = cfg.store.seed, "starting kitchen server");
    serve(listener, state, shutdown_signal()).await
}
