//! HTTP surface: router, shared state and the server loop.

/// Access guard middleware
pub mod guard;
/// Page and form handlers
pub mod handlers;
/// Cookie sessions
pub mod session;

use crate::{
    config::AppConfig,
    core::stores::Stores,
    errors::{Error, Result},
};
use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use session::SessionRegistry;
use chrono::Utc;
use std::{sync::Arc, time::Duration};
use tokio::{net::TcpListener, task::JoinHandle};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

/// State shared by every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Loaded settings
    pub config: Arc<AppConfig>,
    /// Domain stores
    pub stores: Arc<Stores>,
    /// Live browser sessions
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    /// Creates state with no sessions.
    #[must_use]
    pub fn new(config: Arc<AppConfig>, stores: Arc<Stores>) -> Self {
        let sessions = SessionRegistry::with_limit(config.session.max_anonymous);
        Self {
            config,
            stores,
            sessions: Arc::new(sessions),
        }
    }
}

/// How often expired anonymous sessions are reaped.
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Periodically drops signed-out sessions older than `ttl`.
fn spawn_session_cleanup(sessions: Arc<SessionRegistry>, ttl: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = sessions.cleanup_expired(ttl, Utc::now()).await;
            if removed > 0 {
                debug!("Cleaned up {} expired anonymous sessions", removed);
            }
        }
    })
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Self::UnknownAction { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!("Request failed: {}", self);
        (status, self.to_string()).into_response()
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::login_page))
        .route("/dashboard", get(handlers::dashboard))
        .route("/tasks", get(handlers::dashboard))
        .route("/uploads", get(handlers::dashboard))
        .route("/timeline", get(handlers::dashboard))
        .route("/documents", get(handlers::dashboard))
        .route("/projects", get(handlers::projects))
        .route("/projects/:id", get(handlers::project_detail))
        .route("/clients", get(handlers::clients))
        .route("/teams", get(handlers::teams))
        .route("/communication", get(handlers::communication))
        .route("/payments", get(handlers::payments))
        .route("/reports", get(handlers::reports))
        .route("/ai-insights", get(handlers::ai_insights))
        .route("/ai-design-assistant", get(handlers::design_assistant))
        .route("/settings", get(handlers::settings))
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/actions/:action", post(handlers::quick_action))
        .route("/ai-design-assistant/messages", post(handlers::design_prompt))
        .route("/ai-design-assistant/new", post(handlers::design_new_chat))
        .route("/communication/messages", post(handlers::chat_message))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            guard::require_login,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received, stopping server...");
}

/// Serves the dashboard until Ctrl+C.
pub async fn serve(config: Arc<AppConfig>, stores: Arc<Stores>) -> Result<()> {
    let addr = config.server.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", addr, e))?;
    info!("{} listening on http://{}", config.branding.app_name, addr);

    let state = AppState::new(config, stores);
    let ttl = Duration::from_secs(state.config.session.anonymous_ttl_secs);
    let cleanup = spawn_session_cleanup(Arc::clone(&state.sessions), ttl);

    let served = axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await;
    cleanup.abort();
    served?;

    info!("Server stopped.");
    Ok(())
}
