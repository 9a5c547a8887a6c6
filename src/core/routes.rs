//! Route table and the access guard.
//!
//! The guard is a pure predicate over (route, authenticated) evaluated on
//! every request. There is no session expiry or token refresh.

use crate::core::actions::QuickAction;

/// Every page the dashboard can show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// `/` - login screen
    Login,
    /// `/dashboard`
    Dashboard,
    /// `/projects`
    Projects,
    /// `/projects/:id`
    ProjectDetail(String),
    /// `/communication`
    Communication,
    /// `/payments`
    Payments,
    /// `/reports`
    Reports,
    /// `/ai-design-assistant`
    DesignAssistant,
    /// `/ai-insights`
    AiInsights,
    /// `/teams`
    Teams,
    /// `/clients`
    Clients,
    /// `/tasks` - shows the dashboard
    Tasks,
    /// `/uploads` - shows the dashboard
    Uploads,
    /// `/timeline` - shows the dashboard
    Timeline,
    /// `/documents` - shows the dashboard
    Documents,
    /// `/settings`
    Settings,
    /// Anything else
    NotFound,
}

impl Route {
    /// Resolves a request path. Paths must match exactly, so `/dashboard/`
    /// is not `/dashboard`, the same as in the router.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        match path {
            "/" | "" => Self::Login,
            "/dashboard" => Self::Dashboard,
            "/projects" => Self::Projects,
            "/communication" => Self::Communication,
            "/payments" => Self::Payments,
            "/reports" => Self::Reports,
            "/ai-design-assistant" => Self::DesignAssistant,
            "/ai-insights" => Self::AiInsights,
            "/teams" => Self::Teams,
            "/clients" => Self::Clients,
            "/tasks" => Self::Tasks,
            "/uploads" => Self::Uploads,
            "/timeline" => Self::Timeline,
            "/documents" => Self::Documents,
            "/settings" => Self::Settings,
            other => other
                .strip_prefix("/projects/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map_or(Self::NotFound, |id| Self::ProjectDetail(id.to_string())),
        }
    }

    /// Canonical path of the route. `NotFound` has none.
    #[must_use]
    pub fn path(&self) -> Option<String> {
        let path = match self {
            Self::Login => "/",
            Self::Dashboard => "/dashboard",
            Self::Projects => "/projects",
            Self::ProjectDetail(id) => return Some(format!("/projects/{id}")),
            Self::Communication => "/communication",
            Self::Payments => "/payments",
            Self::Reports => "/reports",
            Self::DesignAssistant => "/ai-design-assistant",
            Self::AiInsights => "/ai-insights",
            Self::Teams => "/teams",
            Self::Clients => "/clients",
            Self::Tasks => "/tasks",
            Self::Uploads => "/uploads",
            Self::Timeline => "/timeline",
            Self::Documents => "/documents",
            Self::Settings => "/settings",
            Self::NotFound => return None,
        };
        Some(path.to_string())
    }

    /// Whether the route sits behind the login. Only the login screen and the
    /// catch-all are public.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        !matches!(self, Self::Login | Self::NotFound)
    }
}

/// Form endpoints (dialog submissions and session changes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormRoute {
    /// `POST /login`
    Login,
    /// `POST /logout`
    Logout,
    /// `POST /actions/:action`
    Action(Option<QuickAction>),
    /// `POST /ai-design-assistant/messages`
    DesignPrompt,
    /// `POST /ai-design-assistant/new`
    DesignNewChat,
    /// `POST /communication/messages`
    ChatMessage,
    /// Anything else
    Unknown,
}

impl FormRoute {
    /// Resolves a form submission path.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        match path {
            "/login" => Self::Login,
            "/logout" => Self::Logout,
            "/ai-design-assistant/messages" => Self::DesignPrompt,
            "/ai-design-assistant/new" => Self::DesignNewChat,
            "/communication/messages" => Self::ChatMessage,
            other => other
                .strip_prefix("/actions/")
                .map_or(Self::Unknown, |slug| Self::Action(slug.parse().ok())),
        }
    }

    /// Whether the endpoint accepts signed-out visitors.
    #[must_use]
    pub fn is_public(&self) -> bool {
        match self {
            Self::Login | Self::Logout | Self::Unknown => true,
            // Unknown actions fall through to the handler's error page.
            Self::Action(action) => action.is_none_or(QuickAction::is_public),
            Self::DesignPrompt | Self::DesignNewChat | Self::ChatMessage => false,
        }
    }
}

/// Outcome of the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Render the requested route
    Allow,
    /// Send the browser elsewhere
    Redirect(&'static str),
}

/// Decides whether a page may be shown.
///
/// Signed-out visitors are sent to the login screen from every protected
/// page; signed-in users are sent from the login screen to the dashboard.
#[must_use]
pub const fn guard(route: &Route, authenticated: bool) -> Access {
    match (route, authenticated) {
        (Route::Login, true) => Access::Redirect("/dashboard"),
        (route, false) if route.is_protected() => Access::Redirect("/"),
        _ => Access::Allow,
    }
}

/// Decides whether a form submission may be processed.
#[must_use]
pub fn guard_form(route: &FormRoute, authenticated: bool) -> Access {
    if authenticated || route.is_public() {
        Access::Allow
    } else {
        Access::Redirect("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: [&str; 15] = [
        "/dashboard",
        "/projects",
        "/projects/PRJ-001",
        "/communication",
        "/payments",
        "/reports",
        "/ai-design-assistant",
        "/ai-insights",
        "/teams",
        "/clients",
        "/tasks",
        "/uploads",
        "/timeline",
        "/documents",
        "/settings",
    ];

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Login);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/ai-design-assistant"), Route::DesignAssistant);
        assert_eq!(
            Route::parse("/projects/PRJ-001"),
            Route::ProjectDetail("PRJ-001".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(Route::parse("/nowhere"), Route::NotFound);
        assert_eq!(Route::parse("/projects/"), Route::NotFound);
        assert_eq!(Route::parse("/dashboard/"), Route::NotFound);
        assert_eq!(Route::parse("/projects/PRJ-001/files"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trips() {
        for path in PROTECTED {
            assert_eq!(Route::parse(path).path().as_deref(), Some(path));
        }
        assert_eq!(Route::NotFound.path(), None);
    }

    #[test]
    fn test_unauthenticated_protected_routes_redirect_to_login() {
        for path in PROTECTED {
            assert_eq!(
                guard(&Route::parse(path), false),
                Access::Redirect("/"),
                "{path} should be protected"
            );
        }
    }

    #[test]
    fn test_authenticated_login_redirects_to_dashboard() {
        assert_eq!(guard(&Route::Login, true), Access::Redirect("/dashboard"));
    }

    #[test]
    fn test_login_allowed_when_signed_out() {
        assert_eq!(guard(&Route::Login, false), Access::Allow);
    }

    #[test]
    fn test_not_found_is_never_redirected() {
        assert_eq!(guard(&Route::NotFound, false), Access::Allow);
        assert_eq!(guard(&Route::NotFound, true), Access::Allow);
    }

    #[test]
    fn test_authenticated_protected_routes_allowed() {
        for path in PROTECTED {
            assert_eq!(guard(&Route::parse(path), true), Access::Allow);
        }
    }

    #[test]
    fn test_form_routes() {
        assert_eq!(FormRoute::parse("/login"), FormRoute::Login);
        assert_eq!(
            FormRoute::parse("/actions/create-project"),
            FormRoute::Action(Some(QuickAction::CreateProject))
        );
        assert_eq!(FormRoute::parse("/actions/bogus"), FormRoute::Action(None));
        assert_eq!(FormRoute::parse("/elsewhere"), FormRoute::Unknown);
    }

    #[test]
    fn test_form_guard() {
        let create = FormRoute::Action(Some(QuickAction::CreateProject));
        let reset = FormRoute::Action(Some(QuickAction::ResetPassword));

        assert_eq!(guard_form(&create, false), Access::Redirect("/"));
        assert_eq!(guard_form(&create, true), Access::Allow);
        assert_eq!(guard_form(&reset, false), Access::Allow);
        assert_eq!(guard_form(&FormRoute::Login, false), Access::Allow);
        assert_eq!(guard_form(&FormRoute::DesignPrompt, false), Access::Redirect("/"));
    }
}
