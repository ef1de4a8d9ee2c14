//! System utilities
//!
//! Process-level concerns shared by the runtime: logging setup.

pub mod logging;

pub use logging::init_logging;
