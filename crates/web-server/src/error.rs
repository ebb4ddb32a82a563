use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),
    #[error("No vendor with id {0}")]
    VendorNotFound(u32),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Internal failures are logged in full through `tracing` but only a generic
/// message reaches the client, whatever mode the process runs in.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::Template(template_err) => {
                tracing::error!(error = ?template_err, "Template rendering error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal rendering error occurred".to_string(),
                )
            }
            AppError::VendorNotFound(vendor_id) => (
                StatusCode::NOT_FOUND,
                format!("No vendor with id {vendor_id}"),
            ),
        };

        (status, message).into_response()
    }
}
