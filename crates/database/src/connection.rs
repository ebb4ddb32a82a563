use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::time::Duration;

/// Opens the connection pool backing all storage reads.
///
/// The store file must already exist: the schema is created and populated by
/// an external collaborator, so a missing file is reported as a connection
/// error rather than silently materializing an empty database.
pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::new()
        .filename(&settings.path)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
        .map_err(DbError::Connection)?;

    tracing::debug!(path = %settings.path, "Opened SQLite store");
    Ok(pool)
}
