//! Database connection management.
//!
//! Connection settings come from `DB_*` environment variables (loaded from
//! the discovered `.env` file); the pool is a single MySQL connection since
//! queries run strictly one at a time.

mod pool;
mod settings;

pub use pool::{init_db_pool, DbPool};
pub use settings::DbSettings;
