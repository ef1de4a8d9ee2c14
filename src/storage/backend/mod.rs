//! SeaORM storage backend
//!
//! This module provides database storage using SeaORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::errors::{PageStatsError, Result};
use crate::storage::{AdMetric, AdMetricFields, AdMetricStore};

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{model_to_ad_metric, new_active_model, update_active_model};
pub use query::day_bounds;

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite://")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(PageStatsError::database_config(format!(
            "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// 规范化 backend 名称
pub fn normalize_backend_name(backend: &str) -> String {
    match backend {
        "mariadb" => "mysql".to_string(),
        other => other.to_string(),
    }
}

/// SeaORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmStorage {
    pub async fn new(database_url: &str, backend_name: &str) -> Result<Self> {
        if database_url.is_empty() {
            return Err(PageStatsError::database_config("DATABASE_URL 未设置"));
        }

        let backend_name = normalize_backend_name(backend_name);

        // 根据不同数据库类型配置连接选项
        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url).await?
        } else {
            connect_generic(database_url, &backend_name).await?
        };

        let storage = SeaOrmStorage { db, backend_name };

        run_migrations(&storage.db).await?;

        warn!(
            "{} Storage initialized.",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// 获取数据库连接
    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl AdMetricStore for SeaOrmStorage {
    async fn insert(&self, fields: AdMetricFields) -> Result<AdMetric> {
        self.insert_metric(fields).await
    }

    async fn save(&self, metric: AdMetric) -> Result<AdMetric> {
        self.update_metric(metric).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<AdMetric>> {
        self.get(id).await
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool> {
        self.exists(id).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        self.remove(id).await
    }

    async fn find_all_by_request_date_today(&self) -> Result<Vec<AdMetric>> {
        self.load_today().await
    }
}
