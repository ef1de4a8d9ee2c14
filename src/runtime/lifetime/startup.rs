use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

use crate::storage::{AdMetricStore, SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
}

impl StartupContext {
    /// 以接口形式交给 HTTP 层
    pub fn store(&self) -> Arc<dyn AdMetricStore> {
        self.storage.clone()
    }
}

/// 准备服务器启动的上下文：连接数据库并执行迁移
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create()
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext { storage })
}
