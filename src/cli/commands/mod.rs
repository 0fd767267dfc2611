pub mod about;
pub mod config;
pub mod db;
pub mod export;
pub mod home;
pub mod init;
pub mod monitor;

use crate::config::Config;
use crate::db::Store;
use crate::errors::AppResult;
use crate::utils::time::Clock;
use std::sync::Arc;

/// Open the telemetry store configured for this run (tables ensured).
pub(crate) fn open_store(cfg: &Config) -> AppResult<Store> {
    Store::open(&cfg.database_path())
}

/// Clock shared by the visit and prediction logs.
pub(crate) fn clock(cfg: &Config) -> AppResult<Arc<dyn Clock>> {
    Ok(Arc::new(cfg.clock()?))
}
