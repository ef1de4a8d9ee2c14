//! API 模块常量定义
//!
//! 跨域白名单与接口返回上限等硬编码常量。

/// 唯一允许跨域访问 `/api/**` 的来源
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000/";

/// 当天统计接口最多返回的记录数
pub const TODAY_STATS_LIMIT: usize = 3;

/// API 路由前缀
pub const API_PREFIX: &str = "/api";
