//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::Result;
use tracing::warn;

use crate::api::configure;
use crate::api::middleware::{RequestIdMiddleware, TimingMiddleware};
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// 1. Prepares the storage (connect + migrate)
/// 2. Configures and starts the HTTP server
/// 3. Stops gracefully on Ctrl+C and closes the database pool
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup()
        .await
        .map_err(|e| {
            tracing::error!("Server startup failed: {}", e);
            e
        })?;

    let store = startup.store();
    let db_for_shutdown = startup.storage.get_db().clone();

    let config = crate::config::get_config();

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    let bind_address = config.server.bind_address();

    let server = HttpServer::new(move || {
        // 后 wrap 的先执行：RequestId 最外层，计时日志落在请求 span 内
        App::new()
            .wrap(
                DefaultHeaders::new()
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .wrap(Compress::default())
            .wrap(TimingMiddleware)
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(store.clone()))
            .app_data(web::PayloadConfig::new(1024 * 1024))
            .configure(configure)
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .workers(cpu_count)
    .disable_signals()
    .bind(&bind_address)?;

    warn!("Starting server at http://{}", bind_address);
    let server = server.run();

    actix_web::rt::spawn(lifetime::shutdown::listen_for_shutdown(server.handle()));

    server.await?;

    lifetime::shutdown::close_database(db_for_shutdown).await;
    warn!("Graceful shutdown: all tasks completed");

    Ok(())
}
