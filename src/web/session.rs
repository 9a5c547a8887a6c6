//! Per-browser sessions keyed by a random id carried in a cookie.

use crate::{
    config::settings::SessionConfig,
    core::{actions::Toast, auth::AuthStore, design_chat::DesignChat},
    entities::User,
};
use axum::http::{HeaderMap, header};
use chrono::{DateTime, Utc};
use std::{collections::HashMap, fmt, str::FromStr, time::Duration};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Random session identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Everything one browser owns: who is signed in, a pending toast and the
/// design assistant conversation.
#[derive(Clone, Debug, Default)]
pub struct Session {
    /// Signed-in user
    pub auth: AuthStore,
    /// Toast shown on the next page render
    pub toast: Option<Toast>,
    /// Design assistant history
    pub design_chat: DesignChat,
    /// Set by [`SessionRegistry::create`]
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Signed-out sessions only carry a toast and are bounded and reaped.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        !self.auth.is_authenticated()
    }
}

/// All live sessions.
///
/// Signed-in sessions live until logout. Signed-out ones are capped at
/// `max_anonymous` (oldest evicted first), dropped once their toast is shown
/// and reaped by [`SessionRegistry::cleanup_expired`].
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, Session>>,
    max_anonymous: usize,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_limit(SessionConfig::default().max_anonymous)
    }
}

impl SessionRegistry {
    /// Creates an empty registry with the default anonymous limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry keeping at most `max_anonymous` signed-out
    /// sessions (at least one).
    #[must_use]
    pub fn with_limit(max_anonymous: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_anonymous: max_anonymous.max(1),
        }
    }

    /// Stores `session` under a new id.
    pub async fn create(&self, mut session: Session) -> SessionId {
        let id = SessionId::new();
        session.created_at = Utc::now();
        let anonymous = session.is_anonymous();

        let mut sessions = self.sessions.write().await;
        if anonymous {
            while sessions.values().filter(|s| s.is_anonymous()).count() >= self.max_anonymous {
                let oldest = sessions
                    .iter()
                    .filter(|(_, s)| s.is_anonymous())
                    .min_by_key(|(_, s)| s.created_at)
                    .map(|(id, _)| *id);
                let Some(oldest) = oldest else { break };
                sessions.remove(&oldest);
                debug!(session = %oldest, "Evicted oldest anonymous session");
            }
        }
        sessions.insert(id, session);
        debug!(session = %id, anonymous, "Session created");
        id
    }

    /// Drops signed-out sessions older than `max_age`. Returns how many went.
    pub async fn cleanup_expired(&self, max_age: Duration, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let initial_count = sessions.len();
        sessions.retain(|_, session| {
            let expired = (now - session.created_at)
                .to_std()
                .is_ok_and(|age| age >= max_age);
            !(session.is_anonymous() && expired)
        });
        initial_count - sessions.len()
    }

    /// Drops a session. Unknown ids are ignored.
    pub async fn remove(&self, id: SessionId) {
        if self.sessions.write().await.remove(&id).is_some() {
            debug!(session = %id, "Session removed");
        }
    }

    /// Whether `id` names a live session.
    pub async fn contains(&self, id: SessionId) -> bool {
        self.sessions.read().await.contains_key(&id)
    }

    /// Signed-in user of the session, if any.
    pub async fn user(&self, id: SessionId) -> Option<User> {
        self.sessions
            .read()
            .await
            .get(&id)
            .and_then(|session| session.auth.user().cloned())
    }

    /// Runs `f` against the session. Returns `None` for unknown ids.
    pub async fn update<R>(&self, id: SessionId, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.sessions.write().await.get_mut(&id).map(f)
    }

    /// Removes and returns the pending toast. A signed-out session has
    /// nothing left to carry afterwards and is dropped.
    pub async fn take_toast(&self, id: SessionId) -> Option<Toast> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        let toast = session.toast.take();
        if session.is_anonymous() {
            sessions.remove(&id);
            debug!(session = %id, "Anonymous session consumed");
        }
        toast
    }

    /// Snapshot of the design assistant conversation.
    pub async fn design_chat(&self, id: SessionId) -> DesignChat {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|session| session.design_chat.clone())
            .unwrap_or_default()
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether there are no live sessions.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

/// `Set-Cookie` value that stores `id`.
#[must_use]
pub fn build_cookie(config: &SessionConfig, id: SessionId) -> String {
    let mut parts = vec![format!("{}={id}", config.cookie_name), "Path=/".to_string()];
    if config.secure_cookie {
        parts.push("Secure".to_string());
    }
    parts.push("HttpOnly".to_string());
    parts.push("SameSite=Lax".to_string());
    parts.join("; ")
}

/// `Set-Cookie` value that expires the session cookie.
#[must_use]
pub fn delete_cookie(config: &SessionConfig) -> String {
    format!("{}=; Path=/; Max-Age=0", config.cookie_name)
}

/// Session id from the request's `Cookie` headers, if present and well formed.
#[must_use]
pub fn extract_session_id(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    let prefix = format!("{cookie_name}=");
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().strip_prefix(prefix.as_str()))
        .find_map(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::Role;
    use axum::http::HeaderValue;

    #[test]
    fn test_cookie_attributes() {
        let config = SessionConfig::default();
        let id = SessionId::new();
        let cookie = build_cookie(&config, id);
        assert_eq!(
            cookie,
            format!("structura_session={id}; Path=/; HttpOnly; SameSite=Lax")
        );

        let secure = SessionConfig {
            secure_cookie: true,
            ..SessionConfig::default()
        };
        assert!(build_cookie(&secure, id).contains("; Secure;"));
        assert_eq!(
            delete_cookie(&config),
            "structura_session=; Path=/; Max-Age=0"
        );
    }

    #[test]
    fn test_extract_among_other_cookies() {
        let id = SessionId::new();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; structura_session={id}; x=1")).unwrap(),
        );
        assert_eq!(extract_session_id(&headers, "structura_session"), Some(id));
        assert_eq!(extract_session_id(&headers, "other"), None);
    }

    #[test]
    fn test_malformed_id_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("structura_session=not-a-uuid"),
        );
        assert_eq!(extract_session_id(&headers, "structura_session"), None);
    }

    #[tokio::test]
    async fn test_registry_lifecycle() {
        let registry = SessionRegistry::new();
        let mut session = Session::default();
        session.auth.login("c@structura.io", "x", Role::Client);
        session.toast = Some(Toast::new("Hi", "there"));
        let id = registry.create(session).await;

        assert_eq!(registry.user(id).await.map(|u| u.role), Some(Role::Client));
        assert_eq!(registry.take_toast(id).await.map(|t| t.title), Some("Hi".to_string()));
        // Toasts are shown once.
        assert_eq!(registry.take_toast(id).await, None);

        registry.remove(id).await;
        assert!(!registry.contains(id).await);
        assert!(registry.is_empty().await);
        assert_eq!(registry.user(id).await, None);
    }

    #[tokio::test]
    async fn test_anonymous_sessions_are_capped() {
        let registry = SessionRegistry::with_limit(3);
        let mut signed_in = Session::default();
        signed_in.auth.login("a@structura.io", "x", Role::Admin);
        let member = registry.create(signed_in).await;

        let mut last = None;
        for _ in 0..10 {
            last = Some(registry.create(Session::default()).await);
        }
        // Three anonymous plus the signed-in one.
        assert_eq!(registry.len().await, 4);
        assert!(registry.contains(member).await);
        assert!(registry.contains(last.unwrap()).await);
    }

    #[tokio::test]
    async fn test_cleanup_only_drops_old_anonymous_sessions() {
        let registry = SessionRegistry::new();
        let mut signed_in = Session::default();
        signed_in.auth.login("a@structura.io", "x", Role::Engineer);
        let member = registry.create(signed_in).await;
        let anonymous = registry.create(Session::default()).await;

        let ttl = Duration::from_secs(60);
        assert_eq!(registry.cleanup_expired(ttl, Utc::now()).await, 0);

        let later = Utc::now() + chrono::Duration::seconds(61);
        assert_eq!(registry.cleanup_expired(ttl, later).await, 1);
        assert!(registry.contains(member).await);
        assert!(!registry.contains(anonymous).await);
    }

    #[tokio::test]
    async fn test_anonymous_session_ends_with_its_toast() {
        let registry = SessionRegistry::new();
        let id = registry
            .create(Session {
                toast: Some(Toast::new("Reset Link Sent", "Check your inbox.")),
                ..Session::default()
            })
            .await;
        assert!(registry.take_toast(id).await.is_some());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_unknown_session() {
        let registry = SessionRegistry::new();
        assert_eq!(registry.update(SessionId::new(), |_| 1).await, None);
        assert!(registry.design_chat(SessionId::new()).await.is_empty());
    }
}
