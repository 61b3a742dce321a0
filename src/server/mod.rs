//! The HTTP server: JSON task API plus the static client bundle.
//!
//! ```text
//! GET    /api/todos       list
//! POST   /api/todos       create   {"task": "..."}
//! PUT    /api/todos/{id}  complete {"completed": bool}
//! DELETE /api/todos/{id}  delete
//! *                       client bundle, falling back to index.html
//! ```

pub mod error;
pub mod handlers;

use crate::db::tasks::TaskStore;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use axum::routing::{get, put};
use axum::Router;
use handlers::{api_not_found, create_todo, delete_todo, list_todos, set_completion, AppState};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Builds the application router.
///
/// When `static_dir` is an existing directory, paths outside `/api` are
/// served from it and unknown paths get its `index.html`.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(set_completion).delete(delete_todo))
        .fallback(api_not_found);

    let mut router = Router::new().nest("/api", api);

    match static_dir.filter(|dir| dir.is_dir()) {
        Some(dir) => {
            let index = ServeFile::new(dir.join("index.html"));
            router = router.fallback_service(ServeDir::new(dir).fallback(index));
        }
        None => {
            if let Some(dir) = static_dir {
                tracing::warn!(dir = %dir.display(), "static directory not found, client bundle will not be served");
            }
        }
    }

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    router.layer(TraceLayer::new_for_http()).layer(cors).with_state(state)
}

/// Serves the API on `address` until Ctrl+C or SIGTERM, then closes the store.
pub async fn run(store: TaskStore, address: SocketAddr, static_dir: Option<&Path>) -> Result<()> {
    let store = Arc::new(store);
    let router = create_router(AppState::new(Arc::clone(&store)), static_dir);

    let listener = TcpListener::bind(address).await?;
    let local_address = listener.local_addr()?;
    tracing::info!(%local_address, "listening");
    msg_success!(Message::ServerListening(local_address.to_string()));

    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    match Arc::try_unwrap(store) {
        Ok(store) => store.close()?,
        Err(_) => tracing::warn!("task store still in use at shutdown, dropping it"),
    }
    msg_print!(Message::ServerStopped);

    Ok(())
}

/// Completes on the first Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let received = tokio::select! {
        () = ctrl_c => "Ctrl+C",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal = received, "shutting down");
    msg_print!(Message::ShutdownRequested(received));
}
