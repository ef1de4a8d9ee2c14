use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{PageStatsError, Result};

/// One page's advertising metrics, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdMetric {
    pub id: i32,
    pub page_name: String,
    pub views: i64,
    pub visits: i64,
    pub expenses: i64,
    pub request_date: DateTime<Utc>,
}

impl AdMetric {
    /// 覆盖业务字段，保留 id 与 request_date
    pub fn overwrite_with(&mut self, fields: AdMetricFields) {
        self.page_name = fields.page_name;
        self.views = fields.views;
        self.visits = fields.visits;
        self.expenses = fields.expenses;
    }
}

/// The caller-owned part of a record: everything except `id` and `requestDate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdMetricFields {
    pub page_name: String,
    pub views: i64,
    pub visits: i64,
    pub expenses: i64,
}

/// Request body for create and update.
///
/// `id` and `requestDate` are server-owned and silently ignored when a
/// client sends them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStatsPayload {
    pub page_name: Option<String>,
    pub views: Option<i64>,
    pub visits: Option<i64>,
    pub expenses: Option<i64>,
}

impl PageStatsPayload {
    /// 非空约束校验：四个业务字段都必须提供
    pub fn into_fields(self) -> Result<AdMetricFields> {
        Ok(AdMetricFields {
            page_name: required(self.page_name, "pageName")?,
            views: required(self.views, "views")?,
            visits: required(self.visits, "visits")?,
            expenses: required(self.expenses, "expenses")?,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| PageStatsError::validation(format!("{} 不能为空", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_ignores_server_owned_fields() {
        let payload: PageStatsPayload = serde_json::from_value(json!({
            "id": 42,
            "pageName": "Landing",
            "views": 10,
            "visits": 4,
            "expenses": 2,
            "requestDate": "2001-01-01T00:00:00"
        }))
        .unwrap();

        let fields = payload.into_fields().unwrap();
        assert_eq!(fields.page_name, "Landing");
        assert_eq!(fields.views, 10);
        assert_eq!(fields.visits, 4);
        assert_eq!(fields.expenses, 2);
    }

    #[test]
    fn test_payload_missing_page_name() {
        let payload: PageStatsPayload = serde_json::from_value(json!({
            "views": 1,
            "visits": 1,
            "expenses": 1
        }))
        .unwrap();

        let err = payload.into_fields().unwrap_err();
        assert_eq!(err.code(), "E004");
        assert!(err.message().contains("pageName"));
    }

    #[test]
    fn test_payload_null_counter_rejected() {
        let payload: PageStatsPayload = serde_json::from_value(json!({
            "pageName": "p",
            "views": null,
            "visits": 1,
            "expenses": 1
        }))
        .unwrap();

        assert!(payload.into_fields().is_err());
    }

    #[test]
    fn test_overwrite_preserves_identity() {
        let created = Utc::now();
        let mut metric = AdMetric {
            id: 1,
            page_name: "Old".to_string(),
            views: 1,
            visits: 1,
            expenses: 1,
            request_date: created,
        };

        metric.overwrite_with(AdMetricFields {
            page_name: "X".to_string(),
            views: 5,
            visits: 2,
            expenses: 1,
        });

        assert_eq!(metric.id, 1);
        assert_eq!(metric.request_date, created);
        assert_eq!(metric.page_name, "X");
        assert_eq!(metric.views, 5);
        assert_eq!(metric.visits, 2);
        assert_eq!(metric.expenses, 1);
    }

    #[test]
    fn test_ad_metric_serializes_camel_case() {
        let metric = AdMetric {
            id: 7,
            page_name: "Page".to_string(),
            views: 100,
            visits: 50,
            expenses: 10,
            request_date: Utc::now(),
        };

        let value = serde_json::to_value(&metric).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["pageName"], "Page");
        assert!(value["requestDate"].is_string());
        assert!(value.get("page_name").is_none());
    }
}
