//! Application lifecycle
//!
//! - `lifetime`: startup preparation and shutdown handling
//! - `modes`: execution modes (HTTP server)

pub mod lifetime;
pub mod modes;
