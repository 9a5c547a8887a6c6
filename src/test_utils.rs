//! Shared test utilities for Structura.
//!
//! Builds application state over the mock data set and the requests the
//! router tests send.
#![allow(clippy::unwrap_used)]

use crate::{
    config::AppConfig,
    core::stores::Stores,
    data::MockData,
    entities::Role,
    web::{AppState, router},
};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, header},
    response::Response,
};
use std::sync::Arc;
use tower::ServiceExt;

/// State with default settings, mock stores and no sessions.
pub fn test_state() -> AppState {
    test_state_with(AppConfig::default())
}

/// State with `config`, mock stores and no sessions.
pub fn test_state_with(config: AppConfig) -> AppState {
    AppState::new(Arc::new(config), Arc::new(Stores::new(Arc::new(MockData))))
}

/// `GET path`, optionally carrying a `Cookie` header.
pub fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// Url-encoded `POST path` with `body`.
pub fn post_form(path: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::post(path).header(
        header::CONTENT_TYPE,
        "application/x-www-form-urlencoded",
    );
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Signs in as `role` and returns the `name=value` pair to send back.
pub async fn login_cookie(app: &Router, role: Role) -> String {
    let body = format!("email=test%40structura.io&password=secret&role={role}");
    let response = app
        .clone()
        .oneshot(post_form("/login", None, &body))
        .await
        .unwrap();
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

/// Response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
