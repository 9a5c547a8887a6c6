//! User entity - the signed-in person and the role that drives navigation.
//!
//! Roles are picked on the login screen and never verified. A role decides
//! which sidebar entries are shown and which dashboard variant is rendered.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One of the four fixed user classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Firm administrator - sees everything
    Admin,
    /// Architect working on assigned projects
    Architect,
    /// Engineer working on assigned projects
    Engineer,
    /// External client following their own projects
    Client,
}

impl Role {
    /// All roles in login-selector order.
    pub const ALL: [Self; 4] = [Self::Admin, Self::Architect, Self::Engineer, Self::Client];

    /// Wire name, as used in forms and query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Architect => "architect",
            Self::Engineer => "engineer",
            Self::Client => "client",
        }
    }

    /// Capitalised label shown in the role selector and header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Architect => "Architect",
            Self::Engineer => "Engineer",
            Self::Client => "Client",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown role: {s}"))
    }
}

/// The current user record fabricated at login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Email typed on the login form
    pub email: String,
    /// Display name looked up from the role table
    pub name: String,
    /// Role picked on the login form
    pub role: Role,
}

impl User {
    /// First word of the display name, used in the dashboard greeting.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    /// Upper-case initials of the display name ("Alex Morgan" -> "AM").
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}
