//! CORS policy for the `/api` scope
//!
//! Exactly one origin is allowed; requests from any other origin are rejected
//! by the middleware before they reach a handler.

use actix_cors::Cors;
use actix_web::http::{Method, header};

use crate::api::constants::ALLOWED_ORIGIN;

/// 浏览器发送的 Origin 不带末尾斜杠，比较前去掉
pub fn normalized_origin(origin: &str) -> &str {
    origin.trim_end_matches('/')
}

/// Build CORS middleware allowing only `ALLOWED_ORIGIN`
///
/// Requests carrying a foreign `Origin` are answered with 400 by the
/// middleware itself; the handler never runs.
pub fn build_cors_middleware() -> Cors {
    Cors::default()
        .allowed_origin(normalized_origin(ALLOWED_ORIGIN))
        // 默认只省略 ACAO 头，仍会执行 handler
        .block_on_origin_mismatch(true)
        .allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600)
}
