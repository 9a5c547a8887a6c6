//! Project entity - an architecture project tracked by the firm.
//!
//! Clients reuse the project status vocabulary, so `ProjectStatus` also
//! serves as the client status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a project (and of a client relationship).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Work is ongoing
    Active,
    /// Waiting on client or internal review
    Review,
    /// Delivered
    Completed,
    /// Paused
    OnHold,
}

impl ProjectStatus {
    /// Wire name (`active`, `review`, `completed`, `on-hold`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Review => "review",
            Self::Completed => "completed",
            Self::OnHold => "on-hold",
        }
    }

    /// Badge text, with the dash replaced by a space.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Review => "review",
            Self::Completed => "completed",
            Self::OnHold => "on hold",
        }
    }

    /// Whether the project still has a live deadline.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Active | Self::Review)
    }
}

/// Project record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Identifier such as `PRJ-001`
    pub id: String,
    /// Project name
    pub name: String,
    /// Client organisation name (display string, not a foreign key)
    pub client: String,
    /// Current status
    pub status: ProjectStatus,
    /// Completion percentage, 0-100
    pub progress: u8,
    /// Contractual deadline
    pub deadline: NaiveDate,
    /// Total budget in whole currency units
    pub budget: u64,
}

/// One month of the project-status chart series.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStatusData {
    /// Short month name
    pub month: String,
    /// Projects active that month
    pub active: u32,
    /// Projects completed that month
    pub completed: u32,
    /// Projects on hold that month
    pub on_hold: u32,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[derive(Serialize)]
    struct Wrapper {
        status: ProjectStatus,
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let rendered = toml::to_string(&Wrapper {
            status: ProjectStatus::OnHold,
        })
        .unwrap();
        assert_eq!(rendered.trim(), r#"status = "on-hold""#);
    }

    #[test]
    fn test_status_label_replaces_dash() {
        assert_eq!(ProjectStatus::OnHold.label(), "on hold");
        assert_eq!(ProjectStatus::Review.label(), "review");
    }

    #[test]
    fn test_open_statuses() {
        assert!(ProjectStatus::Active.is_open());
        assert!(ProjectStatus::Review.is_open());
        assert!(!ProjectStatus::Completed.is_open());
        assert!(!ProjectStatus::OnHold.is_open());
    }
}
