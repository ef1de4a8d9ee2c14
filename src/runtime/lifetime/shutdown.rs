use actix_web::dev::ServerHandle;
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tokio::signal;
use tokio::time::timeout;
use tracing::{error, info, warn};

/// 关闭超时时间（秒）
const SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// 等待 Ctrl+C，然后优雅停止 HTTP 服务（处理完进行中的请求）
pub async fn listen_for_shutdown(server: ServerHandle) {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, stopping server...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }

    if timeout(Duration::from_secs(SHUTDOWN_TIMEOUT_SECS), server.stop(true))
        .await
        .is_err()
    {
        error!(
            "Graceful stop timed out after {} seconds, forcing shutdown",
            SHUTDOWN_TIMEOUT_SECS
        );
        server.stop(false).await;
    }
}

/// 关闭数据库连接池
pub async fn close_database(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => info!("Database connections closed"),
        Err(e) => error!("Failed to close database connections: {}", e),
    }
}
