use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to the database: {0}")]
    Connection(sqlx::Error),

    #[error("Database query failed: {0}")]
    Query(#[from] sqlx::Error),
}
