//! Database connection pool management.

use std::sync::Arc;

use log::{error, info};
use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySql, Pool};

use crate::error_handling::DatabaseError;
use crate::storage::DbSettings;

/// Shared handle to the MySQL connection pool.
pub type DbPool = Arc<Pool<MySql>>;

/// Initializes and returns a database connection pool.
///
/// The pool holds a single connection: the export runs its queries strictly
/// one at a time. Connections are checked before acquisition (sqlx default),
/// matching the pre-ping behavior the backend relies on.
///
/// # Errors
///
/// Returns [`DatabaseError::SqlError`] if the connection cannot be
/// established.
pub async fn init_db_pool(settings: &DbSettings) -> Result<DbPool, DatabaseError> {
    info!("Connecting to {}", settings.display_url());

    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .connect_with(settings.connect_options())
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            DatabaseError::SqlError(e)
        })?;

    Ok(Arc::new(pool))
}
