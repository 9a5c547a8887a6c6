//! Team entities - firm staff in summary and detailed form.

use serde::{Deserialize, Serialize};

/// Summary card of a team member, shown on the project detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Full name
    pub name: String,
    /// Job title
    pub role: String,
    /// Avatar initials
    pub avatar: String,
    /// Number of projects the member works on
    pub projects: u32,
}

/// Full team member record, a superset of [`TeamMember`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberDetailed {
    /// Unique identifier
    pub id: u32,
    /// Full name
    pub name: String,
    /// Job title
    pub role: String,
    /// Avatar initials
    pub avatar: String,
    /// Work email
    pub email: String,
    /// Work phone
    pub phone: String,
    /// Number of projects the member works on
    pub projects: u32,
    /// Short names of the assigned projects
    pub assigned_projects: Vec<String>,
}

impl TeamMemberDetailed {
    /// Drops the contact details, keeping the summary fields.
    #[must_use]
    pub fn summary(&self) -> TeamMember {
        TeamMember {
            name: self.name.clone(),
            role: self.role.clone(),
            avatar: self.avatar.clone(),
            projects: self.projects,
        }
    }
}
