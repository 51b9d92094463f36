//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration for the contact endpoints
//! - Middleware stack (request ids, request logging, timeouts, body limit)
//! - Graceful shutdown bounded by a grace period

use crate::config::ServerConfig;
use crate::middleware::{log_requests, request_id};
use crate::routes::contacts::{
    add_contact, delete_contact, find_contact, find_contact_by_name, list_contacts,
    update_contact,
};
use crate::routes::{health, not_found};
use crate::state::ServerState;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::{any, get};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::timeout::TimeoutLayer;

/// Build the Axum router with all routes and middleware
///
/// Contact routes accept any method. Routes taking a path suffix are
/// registered twice: once for the bare prefix and once with a catch-all.
pub fn build_router(state: Arc<ServerState>) -> Router {
    let routes = Router::new()
        .route("/list", any(list_contacts))
        .route("/add", any(add_contact))
        .route("/delete/", any(delete_contact))
        .route("/delete/{*id}", any(delete_contact))
        .route("/update/", any(update_contact))
        .route("/update/{*id}", any(update_contact))
        .route("/find/", any(find_contact))
        .route("/find/{*id}", any(find_contact))
        .route("/find-by-name/", any(find_contact_by_name))
        .route("/find-by-name/{*text}", any(find_contact_by_name))
        .route("/health", get(health::health_check))
        .fallback(not_found);

    with_middleware(routes, state)
}

/// Wrap `routes` in the middleware stack and attach state.
///
/// Outermost first:
/// 1. Request ID tracking
/// 2. Request span and completion log
/// 3. Timeout handling (408 once `timeout_secs` elapses)
/// 4. Body size limit
fn with_middleware(routes: Router<Arc<ServerState>>, state: Arc<ServerState>) -> Router {
    routes
        .layer(DefaultBodyLimit::max(state.config.max_body_size()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .with_state(state)
}

/// Install the process-wide subscriber writing JSON lines to stdout.
pub fn init_tracing(config: &ServerConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .with_target(false)
        .with_thread_ids(true)
        .json()
        .init();
}

/// Start the phonebook HTTP server
///
/// Serves until Ctrl+C or SIGTERM, then stops accepting connections and
/// waits up to `shutdown_grace_secs` for in-flight requests.
///
/// # Example
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config);
    health::mark_started();

    let state = Arc::new(ServerState::new(config.clone()));
    let app = build_router(state);

    let addr: SocketAddr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        "Starting phonebook server on {} (timeout {}s, seeded: {})",
        addr,
        config.timeout_secs,
        config.seed_contacts
    );

    serve_with_shutdown(listener, app, config.shutdown_grace(), shutdown_signal()).await
}

/// Serve `app` on `listener` until `signal` resolves.
///
/// After the signal no new connections are accepted. In-flight requests get
/// `grace` to finish; whatever is still running then is aborted and this
/// returns `Ok(())` anyway.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    app: Router,
    grace: Duration,
    signal: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = stop_rx.await;
    });
    let mut serving = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut serving => {
            result??;
            tracing::info!("Server stopped");
            return Ok(());
        }
        _ = signal => {}
    }

    let _ = stop_tx.send(());
    match tokio::time::timeout(grace, &mut serving).await {
        Ok(result) => {
            result??;
            tracing::info!("Server shutdown complete");
        }
        Err(_) => {
            serving.abort();
            tracing::warn!(
                grace_secs = grace.as_secs(),
                "In-flight requests still running after grace period, forcing shutdown"
            );
        }
    }

    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
