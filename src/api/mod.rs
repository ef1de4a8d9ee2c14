//! HTTP API
//!
//! - `services`: request handlers and route tables
//! - `middleware`: CORS, request id and timing layers

pub mod constants;
pub mod middleware;
pub mod services;

pub use services::configure;
