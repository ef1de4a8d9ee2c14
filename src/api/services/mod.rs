pub mod page_stats;

use actix_web::{HttpResponse, error::InternalError, web};
use tracing::warn;

use crate::api::constants::API_PREFIX;
use crate::api::middleware::build_cors_middleware;

pub use page_stats::{delete_page_stats, get_today_stats, post_page_stats, update_page_stats};

/// `/v1` 路由
///
/// 包含：
/// - GET /v1/page-stats-today - 今日前三条统计
/// - POST /v1/page-stats - 创建
/// - PUT /v1/page-stats/{id} - 更新
/// - DELETE /v1/page-stats/{id} - 删除
pub fn v1_routes() -> actix_web::Scope {
    web::scope("/v1")
        .route("/page-stats-today", web::get().to(get_today_stats))
        .route("/page-stats", web::post().to(post_page_stats))
        .route("/page-stats/{id}", web::put().to(update_page_stats))
        .route("/page-stats/{id}", web::delete().to(delete_page_stats))
}

/// JSON 解析失败时返回空 body 的 400
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, req| {
            warn!("Rejected malformed JSON on {}: {}", req.path(), err);
            InternalError::from_response(err, HttpResponse::BadRequest().finish()).into()
        })
}

/// Register the `/api` scope (CORS-guarded) and its extractor config.
///
/// The caller supplies the store via `web::Data<Arc<dyn AdMetricStore>>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope(API_PREFIX)
            .wrap(build_cors_middleware())
            .service(v1_routes()),
    );
}
