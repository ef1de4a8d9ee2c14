//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::{debug, error};

use super::SeaOrmStorage;
use super::converters::model_to_ad_metric;
use crate::errors::{PageStatsError, Result};
use crate::storage::AdMetric;

use migration::entities::ad_metric;

/// `date` 在时区 `tz` 下的 [当日零点, 次日零点) 区间，转换为 UTC
pub fn day_bounds<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let next = date.succ_opt().unwrap_or(date);
    (start_of_day(tz, date), start_of_day(tz, next))
}

fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);

    tz.from_local_datetime(&midnight)
        .earliest()
        // 夏令时切换可能跳过零点，此时当天从 01:00 开始
        .or_else(|| tz.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}

impl SeaOrmStorage {
    pub async fn get(&self, id: i32) -> Result<Option<AdMetric>> {
        let model = ad_metric::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("查询记录失败 (id: {}): {}", id, e);
                PageStatsError::database_operation(format!("查询记录失败: {}", e))
            })?;

        Ok(model.map(model_to_ad_metric))
    }

    pub async fn exists(&self, id: i32) -> Result<bool> {
        let count = ad_metric::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| PageStatsError::database_operation(format!("查询记录失败: {}", e)))?;

        Ok(count > 0)
    }

    /// 加载今天（服务器本地日期）的全部记录，按 id 升序
    pub async fn load_today(&self) -> Result<Vec<AdMetric>> {
        let (start, end) = day_bounds(&Local, Local::now().date_naive());

        let models = ad_metric::Entity::find()
            .filter(ad_metric::Column::RequestDate.gte(start))
            .filter(ad_metric::Column::RequestDate.lt(end))
            .order_by_asc(ad_metric::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("加载当天记录失败: {}", e);
                PageStatsError::database_operation(format!("加载当天记录失败: {}", e))
            })?;

        debug!(
            "Loaded {} records for {} .. {}",
            models.len(),
            start.to_rfc3339(),
            end.to_rfc3339()
        );

        Ok(models.into_iter().map(model_to_ad_metric).collect())
    }
}
