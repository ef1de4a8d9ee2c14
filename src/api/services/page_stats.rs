//! Page stats CRUD endpoints
//!
//! 所有失败响应均为空 body，具体原因只写日志。

use actix_web::{HttpResponse, Result as ActixResult, web};
use std::sync::Arc;
use tracing::{error, info, trace, warn};

use crate::api::constants::TODAY_STATS_LIMIT;
use crate::errors::PageStatsError;
use crate::storage::{AdMetric, AdMetricStore, PageStatsPayload};

/// 存储层故障统一映射为 500
fn internal_error(context: &str, err: &PageStatsError) -> HttpResponse {
    error!("{}: {}", context, err);
    HttpResponse::InternalServerError().finish()
}

/// GET /api/v1/page-stats-today
pub async fn get_today_stats(
    store: web::Data<Arc<dyn AdMetricStore>>,
) -> ActixResult<HttpResponse> {
    trace!("Request to list today's page stats");

    let records = match store.find_all_by_request_date_today().await {
        Ok(records) => records,
        Err(e) => return Ok(internal_error("Failed to load today's page stats", &e)),
    };

    if records.is_empty() {
        info!("No page stats recorded today");
        return Ok(HttpResponse::NotFound().finish());
    }

    let total = records.len();
    let top: Vec<AdMetric> = records.into_iter().take(TODAY_STATS_LIMIT).collect();
    info!("Returning {} of {} page stats for today", top.len(), total);

    Ok(HttpResponse::Ok().json(top))
}

/// POST /api/v1/page-stats
pub async fn post_page_stats(
    payload: web::Json<PageStatsPayload>,
    store: web::Data<Arc<dyn AdMetricStore>>,
) -> ActixResult<HttpResponse> {
    let fields = match payload.into_inner().into_fields() {
        Ok(fields) => fields,
        Err(e) => {
            warn!("Rejected page stats create: {}", e);
            return Ok(HttpResponse::BadRequest().finish());
        }
    };

    match store.insert(fields).await {
        Ok(saved) => Ok(HttpResponse::Ok().json(saved)),
        Err(e) => {
            warn!("Failed to create page stats: {}", e);
            Ok(HttpResponse::BadRequest().finish())
        }
    }
}

/// PUT /api/v1/page-stats/{id}
pub async fn update_page_stats(
    path: web::Path<i32>,
    payload: web::Json<PageStatsPayload>,
    store: web::Data<Arc<dyn AdMetricStore>>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();

    let mut existing = match store.find_by_id(id).await {
        Ok(Some(existing)) => existing,
        Ok(None) => {
            info!("Update skipped, page stats {} not found", id);
            return Ok(HttpResponse::NotFound().finish());
        }
        Err(e) => return Ok(internal_error("Failed to load page stats", &e)),
    };

    let fields = match payload.into_inner().into_fields() {
        Ok(fields) => fields,
        Err(e) => {
            warn!("Rejected page stats update for {}: {}", id, e);
            return Ok(HttpResponse::BadRequest().finish());
        }
    };

    existing.overwrite_with(fields);

    match store.save(existing).await {
        Ok(saved) => Ok(HttpResponse::Ok().json(saved)),
        Err(e) if e.is_not_found() => {
            info!("Page stats {} vanished before update", id);
            Ok(HttpResponse::NotFound().finish())
        }
        Err(e) => Ok(internal_error("Failed to update page stats", &e)),
    }
}

/// DELETE /api/v1/page-stats/{id}
pub async fn delete_page_stats(
    path: web::Path<i32>,
    store: web::Data<Arc<dyn AdMetricStore>>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();

    match store.exists_by_id(id).await {
        Ok(true) => {}
        Ok(false) => {
            info!("Delete skipped, page stats {} not found", id);
            return Ok(HttpResponse::NotFound().finish());
        }
        Err(e) => return Ok(internal_error("Failed to check page stats", &e)),
    }

    match store.delete_by_id(id).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(internal_error("Failed to delete page stats", &e)),
    }
}
