//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use tracing::{debug, info};

use super::SeaOrmStorage;
use super::converters::{model_to_ad_metric, new_active_model, update_active_model};
use crate::errors::{PageStatsError, Result};
use crate::storage::{AdMetric, AdMetricFields};

use migration::entities::ad_metric;

impl SeaOrmStorage {
    /// 插入新记录，request_date 在写入前由存储层设置
    pub async fn insert_metric(&self, fields: AdMetricFields) -> Result<AdMetric> {
        let active_model = new_active_model(&fields, Utc::now());

        let model = active_model.insert(&self.db).await.map_err(|e| {
            PageStatsError::database_operation(format!(
                "插入记录失败 (page: {}): {}",
                fields.page_name, e
            ))
        })?;

        info!("Ad metric created: id={}, page={}", model.id, model.page_name);
        Ok(model_to_ad_metric(model))
    }

    pub async fn update_metric(&self, metric: AdMetric) -> Result<AdMetric> {
        let id = metric.id;

        let model = match update_active_model(&metric).update(&self.db).await {
            Ok(model) => model,
            // 查到记录后、写入前被并发删除
            Err(DbErr::RecordNotUpdated) => {
                return Err(PageStatsError::not_found(format!("记录不存在: {}", id)));
            }
            Err(e) => {
                return Err(PageStatsError::database_operation(format!(
                    "更新记录失败 (id: {}): {}",
                    id, e
                )));
            }
        };

        info!("Ad metric updated: id={}", id);
        Ok(model_to_ad_metric(model))
    }

    pub async fn remove(&self, id: i32) -> Result<()> {
        let result = ad_metric::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PageStatsError::database_operation(format!("删除记录失败: {}", e)))?;

        if result.rows_affected == 0 {
            debug!("Delete skipped, ad metric {} does not exist", id);
        } else {
            info!("Ad metric deleted: id={}", id);
        }
        Ok(())
    }
}
