//! Authentication state for one browser session.
//!
//! Login never fails: the password is ignored and the display name comes from
//! a fixed role table. Whether this stays a demo login or becomes a stub for
//! real authentication is undecided, so nothing here pretends to verify.

use crate::entities::{Role, User};
use tracing::info;

/// Fixed display name for each role.
#[must_use]
pub const fn display_name(role: Role) -> &'static str {
    match role {
        Role::Admin => "Alex Morgan",
        Role::Architect => "Sarah Chen",
        Role::Engineer => "James Wilson",
        Role::Client => "Michael Roberts",
    }
}

/// Holds the current user of a session.
///
/// The authenticated flag is derived from the user record, so the two can
/// never disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthStore {
    user: Option<User>,
}

impl AuthStore {
    /// Creates a signed-out store.
    #[must_use]
    pub const fn new() -> Self {
        Self { user: None }
    }

    /// Signs in as `role`. Any password is accepted.
    pub fn login(&mut self, email: &str, _password: &str, role: Role) -> &User {
        info!(%role, email, "Signing in");
        self.user.insert(User {
            email: email.to_string(),
            name: display_name(role).to_string(),
            role,
        })
    }

    /// Signs out, clearing the user.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(role = %user.role, email = %user.email, "Signing out");
        }
    }

    /// Current user, if signed in.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Role of the current user, if signed in.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
