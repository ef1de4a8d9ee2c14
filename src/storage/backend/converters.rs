use chrono::{DateTime, Utc};

use crate::storage::{AdMetric, AdMetricFields};
use migration::entities::ad_metric;

/// 将 Sea-ORM Model 转换为 AdMetric
pub fn model_to_ad_metric(model: ad_metric::Model) -> AdMetric {
    AdMetric {
        id: model.id,
        page_name: model.page_name,
        views: model.views,
        visits: model.visits,
        expenses: model.expenses,
        request_date: model.request_date,
    }
}

/// 构建插入用 ActiveModel：id 交给数据库自增，request_date 由存储层给定
pub fn new_active_model(
    fields: &AdMetricFields,
    request_date: DateTime<Utc>,
) -> ad_metric::ActiveModel {
    use sea_orm::ActiveValue::*;

    ad_metric::ActiveModel {
        id: NotSet,
        page_name: Set(fields.page_name.clone()),
        views: Set(fields.views),
        visits: Set(fields.visits),
        expenses: Set(fields.expenses),
        request_date: Set(request_date),
    }
}

/// 构建更新用 ActiveModel：只写业务字段，request_date 保持不变
pub fn update_active_model(metric: &AdMetric) -> ad_metric::ActiveModel {
    use sea_orm::ActiveValue::*;

    ad_metric::ActiveModel {
        id: Unchanged(metric.id),
        page_name: Set(metric.page_name.clone()),
        views: Set(metric.views),
        visits: Set(metric.visits),
        expenses: Set(metric.expenses),
        request_date: NotSet,
    }
}
