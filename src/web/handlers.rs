//! Request handlers: one per page plus the form endpoints.
//!
//! Pages read the stores through short-lived read locks and render with the
//! pending toast of the session. Form endpoints change the session only and
//! answer with a redirect.

use super::{AppState, guard::Viewer, session};
use crate::{
    core::{
        actions::{QuickAction, Toast},
        auth::AuthStore,
    },
    entities::Role,
    errors::Result,
    pages::{
        self, PageContext, PageQuery, dashboard::DashboardData, project_detail::ProjectData,
    },
};
use axum::{
    Extension, Form,
    extract::{Path, Query, State},
    http::{StatusCode, Uri, header},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Redirect target accepted from forms: a local absolute path only.
fn local_target<'a>(target: &'a str, fallback: &'a str) -> &'a str {
    let local = target.starts_with('/') && !target.starts_with("//") && !target.contains('\\');
    if local { target } else { fallback }
}

/// Everything a page render needs besides the stores.
struct PageRequest {
    viewer: Viewer,
    toast: Option<Toast>,
    path: String,
}

impl PageRequest {
    async fn new(state: &AppState, viewer: Viewer, uri: &Uri) -> Self {
        let toast = match viewer.session {
            Some(id) => state.sessions.take_toast(id).await,
            None => None,
        };
        Self {
            viewer,
            toast,
            path: uri.path().to_string(),
        }
    }

    fn context<'a>(&'a self, state: &'a AppState) -> PageContext<'a> {
        PageContext {
            branding: &state.config.branding,
            user: self.viewer.user.as_ref(),
            path: &self.path,
            toast: self.toast.as_ref(),
        }
    }
}

/// `GET /`
pub async fn login_page(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let request = PageRequest::new(&state, viewer, &uri).await;
    Ok(Html(pages::login::render(&request.context(&state), &query)?))
}

/// `GET /dashboard` and the role shortcuts that show it.
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    let request = PageRequest::new(&state, viewer, &uri).await;
    let Some(user) = request.viewer.user.as_ref() else {
        return Ok(Redirect::to("/").into_response());
    };

    let projects = state.stores.projects.read().await;
    let invoices = state.stores.invoices.read().await;
    let tasks = state.stores.tasks.read().await;
    let communication = state.stores.communication.read().await;
    let data = DashboardData {
        projects: &projects,
        invoices: &invoices,
        tasks: &tasks,
        communication: &communication,
    };

    let html = pages::dashboard::render(&request.context(&state), user, &data, &query)?;
    Ok(Html(html).into_response())
}

/// `GET /projects`
pub async fn projects(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let request = PageRequest::new(&state, viewer, &uri).await;
    let projects = state.stores.projects.read().await;
    Ok(Html(pages::projects::render(
        &request.context(&state),
        &projects,
        &query,
    )?))
}

/// `GET /projects/:id`
pub async fn project_detail(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    Path(id): Path<String>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    let request = PageRequest::new(&state, viewer, &uri).await;
    let projects = state.stores.projects.read().await;
    let team = state.stores.team.read().await;
    let tasks = state.stores.tasks.read().await;
    let data = ProjectData {
        projects: &projects,
        team: &team,
        tasks: &tasks,
    };

    let html = pages::project_detail::render(&request.context(&state), &id, &data, &query)?;
    let status = if projects.project_by_id(&id).is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    Ok((status, Html(html)).into_response())
}

/// `GET /clients`
pub async fn clients(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let request = PageRequest::new(&state, viewer, &uri).await;
    let clients = state.stores.clients.read().await;
    Ok(Html(pages::clients::render(
        &request.context(&state),
        &clients,
        &query,
    )?))
}

/// `GET /teams`
pub async fn teams(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let request = PageRequest::new(&state, viewer, &uri).await;
    let team = state.stores.team.read().await;
    Ok(Html(pages::teams::render(&request.context(&state), &team, &query)?))
}

/// `GET /communication`
pub async fn communication(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let request = PageRequest::new(&state, viewer, &uri).await;
    let communication = state.stores.communication.read().await;
    Ok(Html(pages::communication::render(
        &request.context(&state),
        &communication,
        &query,
    )?))
}

/// `GET /payments`
pub async fn payments(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let request = PageRequest::new(&state, viewer, &uri).await;
    let invoices = state.stores.invoices.read().await;
    let projects = state.stores.projects.read().await;
    Ok(Html(pages::payments::render(
        &request.context(&state),
        &invoices,
        &projects,
        &query,
    )?))
}

/// `GET /reports`
pub async fn reports(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let request = PageRequest::new(&state, viewer, &uri).await;
    let projects = state.stores.projects.read().await;
    let invoices = state.stores.invoices.read().await;
    Ok(Html(pages::reports::render(
        &request.context(&state),
        &projects,
        &invoices,
        &query,
    )?))
}

/// `GET /ai-insights`
pub async fn ai_insights(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let request = PageRequest::new(&state, viewer, &uri).await;
    let projects = state.stores.projects.read().await;
    Ok(Html(pages::ai_insights::render(
        &request.context(&state),
        &projects,
        &query,
    )?))
}

/// `GET /ai-design-assistant`
pub async fn design_assistant(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    uri: Uri,
) -> Result<Html<String>> {
    let request = PageRequest::new(&state, viewer, &uri).await;
    let chat = match request.viewer.session {
        Some(id) => state.sessions.design_chat(id).await,
        None => crate::core::design_chat::DesignChat::new(),
    };
    Ok(Html(pages::design_assistant::render(
        &request.context(&state),
        &chat,
    )?))
}

/// `GET /settings`
pub async fn settings(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    let request = PageRequest::new(&state, viewer, &uri).await;
    let Some(user) = request.viewer.user.as_ref() else {
        return Ok(Redirect::to("/").into_response());
    };
    let html = pages::settings::render(&request.context(&state), user, &query)?;
    Ok(Html(html).into_response())
}

/// Fallback for every unknown path.
pub async fn not_found(
    State(state): State<AppState>,
    viewer: Option<Extension<Viewer>>,
    uri: Uri,
) -> Result<Response> {
    let viewer = viewer.map(|Extension(viewer)| viewer).unwrap_or_default();
    let request = PageRequest::new(&state, viewer, &uri).await;
    debug!(path = %request.path, "No route");
    let html = pages::not_found::render(&request.context(&state))?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

/// Sign-in form.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Typed email
    pub email: String,
    /// Typed password, never checked
    #[serde(default)]
    pub password: String,
    /// Chosen role
    pub role: Role,
}

/// `POST /login`: replaces any existing session with a signed-in one.
pub async fn login(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    Form(form): Form<LoginForm>,
) -> Response {
    if let Some(old) = viewer.session {
        state.sessions.remove(old).await;
    }

    let mut auth = AuthStore::new();
    auth.login(form.email.trim(), &form.password, form.role);
    let id = state
        .sessions
        .create(session::Session {
            auth,
            ..session::Session::default()
        })
        .await;

    let cookie = session::build_cookie(&state.config.session, id);
    (
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Redirect::to("/dashboard"),
    )
        .into_response()
}

/// `POST /logout`: drops the session and expires the cookie.
pub async fn logout(State(state): State<AppState>, Extension(viewer): Extension<Viewer>) -> Response {
    if let Some(id) = viewer.session {
        state.sessions.update(id, |session| session.auth.logout()).await;
        state.sessions.remove(id).await;
    }

    let cookie = session::delete_cookie(&state.config.session);
    (AppendHeaders([(header::SET_COOKIE, cookie)]), Redirect::to("/")).into_response()
}

/// Fields shared by every quick-action form. Anything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ActionForm {
    /// Page to come back to
    #[serde(default)]
    pub return_to: String,
}

/// Stores `toast` for the viewer, opening an anonymous session when there is
/// none yet, then redirects to `target`.
async fn flash(state: &AppState, viewer: &Viewer, toast: Toast, target: &str) -> Response {
    if let Some(id) = viewer.session {
        let stored = state
            .sessions
            .update(id, |session| session.toast = Some(toast.clone()))
            .await;
        if stored.is_some() {
            return Redirect::to(target).into_response();
        }
    }

    let id = state
        .sessions
        .create(session::Session {
            toast: Some(toast),
            ..session::Session::default()
        })
        .await;
    let cookie = session::build_cookie(&state.config.session, id);
    (AppendHeaders([(header::SET_COOKIE, cookie)]), Redirect::to(target)).into_response()
}

/// `POST /actions/:action`: raises the action's toast and goes back.
pub async fn quick_action(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    Path(slug): Path<String>,
    Form(form): Form<ActionForm>,
) -> Result<Response> {
    let action: QuickAction = slug.parse()?;
    let fallback = if viewer.is_authenticated() { "/dashboard" } else { "/" };
    let target = local_target(&form.return_to, fallback);

    info!(%action, "Quick action submitted");
    Ok(flash(&state, &viewer, action.toast(), target).await)
}

/// Design assistant prompt.
#[derive(Debug, Deserialize)]
pub struct PromptForm {
    /// Design idea
    #[serde(default)]
    pub prompt: String,
}

/// `POST /ai-design-assistant/messages`
pub async fn design_prompt(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    Form(form): Form<PromptForm>,
) -> Response {
    const PAGE: &str = "/ai-design-assistant";
    let Some(id) = viewer.session else {
        return Redirect::to("/").into_response();
    };
    if form.prompt.trim().is_empty() {
        return Redirect::to(PAGE).into_response();
    }

    let delay = state.config.design_assistant.response_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    let answered = state
        .sessions
        .update(id, |session| {
            let sent = session.design_chat.send(&form.prompt, Utc::now()).is_some();
            if sent {
                session.toast = Some(Toast::design_generated());
            }
            sent
        })
        .await
        .unwrap_or(false);
    debug!(answered, "Design prompt handled");
    Redirect::to(PAGE).into_response()
}

/// `POST /ai-design-assistant/new`
pub async fn design_new_chat(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
) -> Response {
    if let Some(id) = viewer.session {
        state.sessions.update(id, |session| session.design_chat.clear()).await;
    }
    Redirect::to("/ai-design-assistant").into_response()
}

/// Chat room message.
#[derive(Debug, Deserialize)]
pub struct ChatMessageForm {
    /// Target room id
    pub room: u32,
    /// Message text
    #[serde(default)]
    pub message: String,
    /// Page to come back to
    #[serde(default)]
    pub return_to: String,
}

/// `POST /communication/messages`: blank messages are dropped silently.
pub async fn chat_message(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    Form(form): Form<ChatMessageForm>,
) -> Response {
    let target = local_target(&form.return_to, "/communication");
    if form.message.trim().is_empty() {
        return Redirect::to(target).into_response();
    }

    let room = state
        .stores
        .communication
        .read()
        .await
        .room_by_id(form.room)
        .map(|room| room.name.clone());
    let Some(room) = room else {
        return Redirect::to(target).into_response();
    };

    flash(&state, &viewer, Toast::message_sent(&room), target).await
}
