//! Access guard middleware.
//!
//! Resolves the session cookie into a [`Viewer`], asks
//! [`crate::core::routes`] whether the request may proceed and either
//! redirects or forwards with the viewer attached.

use super::{
    AppState,
    session::{self, SessionId},
};
use crate::{
    core::routes::{self, Access, FormRoute, Route},
    entities::User,
};
use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

/// Who is making the request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Viewer {
    /// Live session named by the cookie
    pub session: Option<SessionId>,
    /// Signed-in user of that session
    pub user: Option<User>,
}

impl Viewer {
    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Looks up the viewer behind a session id taken from the cookie.
pub async fn resolve_viewer(state: &AppState, session: Option<SessionId>) -> Viewer {
    let Some(id) = session else {
        return Viewer::default();
    };

    if !state.sessions.contains(id).await {
        return Viewer::default();
    }

    Viewer {
        session: Some(id),
        user: state.sessions.user(id).await,
    }
}

/// Decides access for a request. Reads (`GET`, `HEAD`) are checked against
/// the page table, everything else against the form endpoints.
#[must_use]
pub fn access_for(method: &Method, path: &str, authenticated: bool) -> Access {
    if method == Method::GET || method == Method::HEAD {
        routes::guard(&Route::parse(path), authenticated)
    } else {
        routes::guard_form(&FormRoute::parse(path), authenticated)
    }
}

/// Middleware enforcing the guard on every request.
pub async fn require_login(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // The request is not held across the registry lookup.
    let cookie_name = &state.config.session.cookie_name;
    let session_id = session::extract_session_id(request.headers(), cookie_name);
    let viewer = resolve_viewer(&state, session_id).await;

    match access_for(request.method(), request.uri().path(), viewer.is_authenticated()) {
        Access::Redirect(to) => {
            debug!(
                method = %request.method(),
                path = request.uri().path(),
                to,
                "Guard redirect"
            );
            Redirect::to(to).into_response()
        }
        Access::Allow => {
            request.extensions_mut().insert(viewer);
            next.run(request).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::auth::AuthStore, entities::Role, test_utils::test_state, web::session::Session,
    };

    fn assert_send<T: Send>(_: &T) {}

    #[test]
    fn test_pages_use_route_guard() {
        assert_eq!(access_for(&Method::GET, "/teams", false), Access::Redirect("/"));
        assert_eq!(access_for(&Method::GET, "/", true), Access::Redirect("/dashboard"));
        assert_eq!(access_for(&Method::HEAD, "/teams", true), Access::Allow);
        assert_eq!(access_for(&Method::GET, "/no/such/page", false), Access::Allow);
    }

    #[test]
    fn test_forms_use_form_guard() {
        assert_eq!(access_for(&Method::POST, "/login", false), Access::Allow);
        assert_eq!(
            access_for(&Method::POST, "/actions/reset-password", false),
            Access::Allow
        );
        assert_eq!(
            access_for(&Method::POST, "/actions/add-client", false),
            Access::Redirect("/")
        );
        assert_eq!(
            access_for(&Method::POST, "/ai-design-assistant/messages", false),
            Access::Redirect("/")
        );
        assert_eq!(
            access_for(&Method::POST, "/actions/add-client", true),
            Access::Allow
        );
    }

    #[test]
    fn test_signed_out_viewer() {
        assert!(!Viewer::default().is_authenticated());
    }

    #[test]
    fn test_lookup_future_is_send() {
        let state = test_state();
        assert_send(&resolve_viewer(&state, None));
    }

    #[tokio::test]
    async fn test_resolve_viewer_by_session_id() {
        let state = test_state();
        assert_eq!(resolve_viewer(&state, None).await, Viewer::default());
        assert_eq!(
            resolve_viewer(&state, Some(SessionId::new())).await,
            Viewer::default()
        );

        let mut auth = AuthStore::new();
        auth.login("sarah@structura.io", "", Role::Architect);
        let id = state
            .sessions
            .create(Session {
                auth,
                ..Session::default()
            })
            .await;
        let viewer = resolve_viewer(&state, Some(id)).await;
        assert_eq!(viewer.session, Some(id));
        assert_eq!(viewer.user.map(|u| u.role), Some(Role::Architect));

        let anonymous = state.sessions.create(Session::default()).await;
        let viewer = resolve_viewer(&state, Some(anonymous)).await;
        assert_eq!(viewer.session, Some(anonymous));
        assert!(!viewer.is_authenticated());
    }
}
