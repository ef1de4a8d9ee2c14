use async_trait::async_trait;

use crate::errors::Result;
use crate::storage::{AdMetric, AdMetricFields};

/// Persistence contract the HTTP layer depends on.
///
/// `SeaOrmStorage` is the production implementation; anything honouring
/// these operations can stand in for it.
#[async_trait]
pub trait AdMetricStore: Send + Sync {
    /// Persist a new record. The store assigns `id` and `request_date`.
    async fn insert(&self, fields: AdMetricFields) -> Result<AdMetric>;

    /// Write back the business fields of an existing record.
    ///
    /// `request_date` is never modified. Returns `NotFound` if the row is gone.
    async fn save(&self, metric: AdMetric) -> Result<AdMetric>;

    async fn find_by_id(&self, id: i32) -> Result<Option<AdMetric>>;

    async fn exists_by_id(&self, id: i32) -> Result<bool>;

    /// Remove the row if present. A missing id is not an error.
    async fn delete_by_id(&self, id: i32) -> Result<()>;

    /// Records whose `request_date` falls on the server's current local date,
    /// in insertion order.
    async fn find_all_by_request_date_today(&self) -> Result<Vec<AdMetric>>;
}
