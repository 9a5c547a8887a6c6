//! Role-to-navigation table behind the sidebar.

use crate::entities::{Role, User};

/// Sidebar icon. Only the identity matters here; the pages decide the glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    /// Dashboard grid
    Dashboard,
    /// Project folder
    Projects,
    /// People
    Teams,
    /// Building
    Clients,
    /// Speech bubble
    Messages,
    /// Card
    Payments,
    /// Ruler and pencil
    DesignAssistant,
    /// Brain
    AiInsights,
    /// Bar chart
    Reports,
    /// Gear
    Settings,
    /// Check box
    Tasks,
    /// Upload arrow
    Uploads,
    /// Clock
    Timeline,
    /// Document
    Documents,
}

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Link text
    pub label: &'static str,
    /// Target path
    pub path: &'static str,
    /// Icon
    pub icon: Icon,
}

const fn item(label: &'static str, path: &'static str, icon: Icon) -> NavItem {
    NavItem { label, path, icon }
}

const ADMIN: &[NavItem] = &[
    item("Dashboard", "/dashboard", Icon::Dashboard),
    item("Projects", "/projects", Icon::Projects),
    item("Teams", "/teams", Icon::Teams),
    item("Clients", "/clients", Icon::Clients),
    item("Communication", "/communication", Icon::Messages),
    item("Payments", "/payments", Icon::Payments),
    item("AI Design Assistant", "/ai-design-assistant", Icon::DesignAssistant),
    item("Reports", "/reports", Icon::Reports),
    item("Settings", "/settings", Icon::Settings),
];

const ARCHITECT: &[NavItem] = &[
    item("Dashboard", "/dashboard", Icon::Dashboard),
    item("My Projects", "/projects", Icon::Projects),
    item("Tasks", "/tasks", Icon::Tasks),
    item("Design Uploads", "/uploads", Icon::Uploads),
    item("Communication", "/communication", Icon::Messages),
    item("AI Assistant", "/ai-insights", Icon::AiInsights),
    item("Reports", "/reports", Icon::Reports),
    item("AI Design Assistant", "/ai-design-assistant", Icon::DesignAssistant),
];

const ENGINEER: &[NavItem] = &[
    item("Dashboard", "/dashboard", Icon::Dashboard),
    item("My Projects", "/projects", Icon::Projects),
    item("Tasks", "/tasks", Icon::Tasks),
    item("Design Uploads", "/uploads", Icon::Uploads),
    item("Communication", "/communication", Icon::Messages),
];

const CLIENT: &[NavItem] = &[
    item("Dashboard", "/dashboard", Icon::Dashboard),
    item("My Projects", "/projects", Icon::Projects),
    item("Timeline", "/timeline", Icon::Timeline),
    item("Documents", "/documents", Icon::Documents),
    item("Payments", "/payments", Icon::Payments),
    item("Chat", "/communication", Icon::Messages),
    item("AI Design Assistant", "/ai-design-assistant", Icon::DesignAssistant),
];

/// Ordered navigation entries for a role.
#[must_use]
pub const fn items_for(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => ADMIN,
        Role::Architect => ARCHITECT,
        Role::Engineer => ENGINEER,
        Role::Client => CLIENT,
    }
}

/// Entries the sidebar shows for the current user; `None` hides the sidebar.
#[must_use]
pub fn sidebar_for(user: Option<&User>) -> Option<&'static [NavItem]> {
    user.map(|user| items_for(user.role))
}

/// Whether `item_path` should be highlighted while `current_path` is shown.
///
/// Matches the exact path or any sub-path (`/projects` is active on
/// `/projects/PRJ-001`, but not on `/projects-archive`).
#[must_use]
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    current_path == item_path
        || current_path
            .strip_prefix(item_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: Role) -> Vec<&'static str> {
        items_for(role).iter().map(|item| item.label).collect()
    }

    #[test]
    fn test_admin_navigation() {
        assert_eq!(
            labels(Role::Admin),
            [
                "Dashboard",
                "Projects",
                "Teams",
                "Clients",
                "Communication",
                "Payments",
                "AI Design Assistant",
                "Reports",
                "Settings",
            ]
        );
    }

    #[test]
    fn test_architect_navigation() {
        assert_eq!(
            labels(Role::Architect),
            [
                "Dashboard",
                "My Projects",
                "Tasks",
                "Design Uploads",
                "Communication",
                "AI Assistant",
                "Reports",
                "AI Design Assistant",
            ]
        );
    }

    #[test]
    fn test_engineer_navigation() {
        assert_eq!(
            labels(Role::Engineer),
            ["Dashboard", "My Projects", "Tasks", "Design Uploads", "Communication"]
        );
    }

    #[test]
    fn test_client_navigation() {
        let paths: Vec<_> = items_for(Role::Client).iter().map(|i| i.path).collect();
        assert_eq!(
            paths,
            [
                "/dashboard",
                "/projects",
                "/timeline",
                "/documents",
                "/payments",
                "/communication",
                "/ai-design-assistant",
            ]
        );
    }

    #[test]
    fn test_sidebar_hidden_without_user() {
        assert!(sidebar_for(None).is_none());
    }

    #[test]
    fn test_sidebar_uses_user_role() {
        let user = User {
            email: "e@structura.io".to_string(),
            name: "James Wilson".to_string(),
            role: Role::Engineer,
        };
        assert_eq!(sidebar_for(Some(&user)), Some(items_for(Role::Engineer)));
    }

    #[test]
    fn test_is_active_exact_and_prefix() {
        assert!(is_active("/projects", "/projects"));
        assert!(is_active("/projects", "/projects/PRJ-001"));
        assert!(!is_active("/projects", "/projects-archive"));
        assert!(!is_active("/projects", "/dashboard"));
    }
}
