//! Server-rendered pages.
//!
//! Every page is a pure function from store contents and [`PageQuery`] UI
//! state to an HTML string. Dialog visibility, the active tab and search text
//! all live in the query string, so a page never keeps state of its own.

/// Page chrome
pub mod layout;
/// Shared HTML fragments
pub mod widgets;

/// AI tool catalogue page
pub mod ai_insights;
/// Client list and detail dialog
pub mod clients;
/// Chat rooms
pub mod communication;
/// Role-specific dashboards
pub mod dashboard;
/// Design assistant chat
pub mod design_assistant;
/// Login screen
pub mod login;
/// Catch-all page
pub mod not_found;
/// Invoices and contracts
pub mod payments;
/// Single project with tabs
pub mod project_detail;
/// Project list
pub mod projects;
/// Analytics
pub mod reports;
/// Account settings
pub mod settings;
/// Team directory
pub mod teams;

use crate::{
    config::settings::BrandingConfig,
    core::actions::{QuickAction, Toast},
    entities::User,
};
use serde::Deserialize;

/// Request-independent inputs shared by every page.
#[derive(Clone, Copy, Debug)]
pub struct PageContext<'a> {
    /// Names and currency
    pub branding: &'a BrandingConfig,
    /// Signed-in user, if any
    pub user: Option<&'a User>,
    /// Path being rendered, for sidebar highlighting
    pub path: &'a str,
    /// Toast to show once
    pub toast: Option<&'a Toast>,
}

impl PageContext<'_> {
    /// Currency prefix for money amounts.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.branding.currency_symbol
    }
}

/// UI state carried in the query string.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PageQuery {
    /// Search text
    pub q: String,
    /// Teams role filter
    pub role: Option<String>,
    /// Active tab on tabbed pages
    pub tab: Option<String>,
    /// Slug of the open dialog
    pub dialog: Option<String>,
    /// Selected chat room
    pub room: Option<u32>,
    /// Client shown in the detail dialog
    pub client: Option<u32>,
}

impl PageQuery {
    /// The open dialog, if the slug names a known action.
    #[must_use]
    pub fn dialog_action(&self) -> Option<QuickAction> {
        self.dialog.as_deref().and_then(|slug| slug.parse().ok())
    }

    /// Whether the dialog of `action` is open.
    #[must_use]
    pub fn is_open(&self, action: QuickAction) -> bool {
        self.dialog_action() == Some(action)
    }

    /// Search text exactly as typed.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.q
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::insights::AiFeature;

    #[test]
    fn test_dialog_action_parses_slug() {
        let query = PageQuery {
            dialog: Some("launch-task-scheduler".to_string()),
            ..PageQuery::default()
        };
        assert_eq!(
            query.dialog_action(),
            Some(QuickAction::LaunchFeature(AiFeature::TaskScheduler))
        );
        assert!(query.is_open(QuickAction::LaunchFeature(AiFeature::TaskScheduler)));
        assert!(!query.is_open(QuickAction::CreateProject));
    }

    #[test]
    fn test_unknown_dialog_is_closed() {
        let query = PageQuery {
            dialog: Some("self-destruct".to_string()),
            ..PageQuery::default()
        };
        assert_eq!(query.dialog_action(), None);
    }

    #[test]
    fn test_search_keeps_whitespace() {
        let query = PageQuery {
            q: "  sky ".to_string(),
            ..PageQuery::default()
        };
        assert_eq!(query.search(), "  sky ");
    }
}
