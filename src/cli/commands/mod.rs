pub mod add;
pub mod calendar;
pub mod config;
pub mod db;
pub mod del;
pub mod demo;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod summary;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database with its schema up to date.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
