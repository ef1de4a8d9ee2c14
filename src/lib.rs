//! page-stats - daily advertising page metrics over HTTP
//!
//! Stores one record per page and day (views, visits, expenses) and exposes
//! CRUD endpoints under `/api/v1`.
//!
//! # Architecture
//! - `storage`: `AdMetricStore` trait and its SeaORM backend
//! - `api`: HTTP handlers, routes and middleware (CORS, request id, timing)
//! - `config`: static configuration (TOML + environment)
//! - `runtime`: application lifecycle and the server mode
//! - `system`: logging setup

pub mod api;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod storage;
pub mod system;
