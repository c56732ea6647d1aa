//! Smart Home Control Backend Library
//!
//! Scaffold for the smart home / industrial device control service:
//! - Liveness endpoints served over HTTP (`api`)
//! - Persistence schema for users and the devices they own (`schema`, `models`)
//! - Table bootstrap and connection pooling (`db`)
//! - Environment-driven server settings (`config`)

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod schema;

/// Product name, also used as the welcome message subject.
pub const APP_TITLE: &str = "智能家居控制系统";

pub const APP_DESCRIPTION: &str = "一个用于控制智能家居和工业设备的 API";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds a client gets to send a complete request head.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
