//! Team store - firm staff and the filters behind the Teams page.

use crate::{
    core::search,
    data::DataSource,
    entities::{TeamMember, TeamMemberDetailed},
};
use tracing::debug;

/// Role filter value that disables role filtering.
pub const ALL_ROLES: &str = "All";

/// Read-only view over team members.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamStore {
    members: Vec<TeamMember>,
    detailed_members: Vec<TeamMemberDetailed>,
}

impl TeamStore {
    /// Builds a store populated from `source`.
    #[must_use]
    pub fn from_source(source: &dyn DataSource) -> Self {
        let mut store = Self::default();
        store.fetch_team(source);
        store
    }

    /// Re-assigns both member lists from `source`.
    pub fn fetch_team(&mut self, source: &dyn DataSource) {
        self.members = source.team_members();
        self.detailed_members = source.team_members_detailed();
        debug!(
            members = self.members.len(),
            detailed = self.detailed_members.len(),
            "Fetched team"
        );
    }

    /// Summary members (project detail page).
    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Members with contact details (Teams page).
    #[must_use]
    pub fn detailed_members(&self) -> &[TeamMemberDetailed] {
        &self.detailed_members
    }

    /// Role filter options: `"All"` then each distinct job title in
    /// first-seen order.
    #[must_use]
    pub fn role_options(&self) -> Vec<&str> {
        let mut options = vec![ALL_ROLES];
        for member in &self.detailed_members {
            if !options.contains(&member.role.as_str()) {
                options.push(&member.role);
            }
        }
        options
    }

    /// Members matching both the free-text search (name or job title) and the
    /// role filter. `"All"` disables the role filter.
    pub fn filter<'a>(
        &'a self,
        query: &'a str,
        role: &'a str,
    ) -> impl Iterator<Item = &'a TeamMemberDetailed> + 'a {
        self.detailed_members.iter().filter(move |m| {
            search::matches_any(&[m.name.as_str(), m.role.as_str()], query)
                && (role == ALL_ROLES || m.role == role)
        })
    }
}
