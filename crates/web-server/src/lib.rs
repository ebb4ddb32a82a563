use axum::{routing::get, Router};
use configuration::Settings;
use database::DbRepository;
use std::sync::Arc;
use tera::Tera;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
///
/// Built once at startup and passed to the router explicitly; there is no
/// process-wide singleton. It is immutable after construction, so concurrent
/// requests share it without coordination.
#[derive(Clone)]
pub struct AppState {
    pub db_repo: DbRepository,
    pub templates: Tera,
}

/// Builds the application router.
///
/// Kept separate from [`run_server`] so tests can drive the routes
/// in-process without binding a listener.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/vendors", get(handlers::list_vendors))
        .route("/vendors/:vendor_id/menu", get(handlers::vendor_menu))
        .with_state(state)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let db_pool = database::connect(&settings.database).await?;
    let db_repo = DbRepository::new(db_pool);
    // A template set that fails to parse is a startup failure, not a
    // per-request one.
    let templates = Tera::new(&settings.templates.glob)?;

    let state = Arc::new(AppState { db_repo, templates });
    let app = app(state);

    let address = settings.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Web server listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server shut down.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
