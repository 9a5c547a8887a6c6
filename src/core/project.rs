//! Project store - holds the project list and the monthly status series.

use crate::{
    core::search,
    data::DataSource,
    entities::{Project, ProjectStatus, ProjectStatusData},
};
use chrono::NaiveDate;
use tracing::debug;

/// Read-only view over the firm's projects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectStore {
    projects: Vec<Project>,
    status_data: Vec<ProjectStatusData>,
}

impl ProjectStore {
    /// Builds a store populated from `source`.
    #[must_use]
    pub fn from_source(source: &dyn DataSource) -> Self {
        let mut store = Self::default();
        store.fetch_projects(source);
        store
    }

    /// Re-assigns both arrays from `source`.
    pub fn fetch_projects(&mut self, source: &dyn DataSource) {
        self.projects = source.projects();
        self.status_data = source.project_status_data();
        debug!(
            projects = self.projects.len(),
            months = self.status_data.len(),
            "Fetched projects"
        );
    }

    /// All projects in source order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Monthly active/completed/on-hold counts.
    #[must_use]
    pub fn status_data(&self) -> &[ProjectStatusData] {
        &self.status_data
    }

    /// Projects currently in the `active` state.
    pub fn active_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
    }

    /// Projects that still have a deadline ahead (active or in review).
    pub fn open_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.status.is_open())
    }

    /// Earliest deadline among open projects.
    #[must_use]
    pub fn next_deadline(&self) -> Option<NaiveDate> {
        self.open_projects().map(|p| p.deadline).min()
    }

    /// Looks a project up by its `PRJ-xxx` id.
    #[must_use]
    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Projects whose name or client contains `query`.
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Project> + 'a {
        self.projects
            .iter()
            .filter(move |p| search::matches_any(&[p.name.as_str(), p.client.as_str()], query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockData;

    fn store() -> ProjectStore {
        ProjectStore::from_source(&MockData)
    }

    #[test]
    fn test_from_source_loads_everything() {
        let store = store();
        assert_eq!(store.projects().len(), 6);
        assert_eq!(store.status_data().len(), 6);
        assert_eq!(store.status_data()[0].month, "Sep");
    }

    #[test]
    fn test_active_projects() {
        let ids: Vec<_> = store().active_projects().map(|p| p.id.clone()).collect();
        assert_eq!(ids, ["PRJ-001", "PRJ-002", "PRJ-004"]);
    }

    #[test]
    fn test_open_projects_include_review() {
        assert_eq!(store().open_projects().count(), 4);
    }

    #[test]
    fn test_next_deadline_is_earliest_open() {
        assert_eq!(
            store().next_deadline(),
            NaiveDate::from_ymd_opt(2025, 3, 20)
        );
    }

    #[test]
    fn test_project_by_id() {
        let store = store();
        assert_eq!(
            store.project_by_id("PRJ-001").map(|p| p.name.as_str()),
            Some("Skyline Tower")
        );
        assert!(store.project_by_id("PRJ-999").is_none());
    }

    #[test]
    fn test_search_by_name_or_client() {
        let store = store();
        let by_name: Vec<_> = store.search("harbor").map(|p| p.id.as_str()).collect();
        assert_eq!(by_name, ["PRJ-002"]);

        let by_client: Vec<_> = store.search("TECHFORWARD").map(|p| p.id.as_str()).collect();
        assert_eq!(by_client, ["PRJ-006"]);

        assert_eq!(store.search("").count(), 6);
        assert_eq!(store.search("nothing like this").count(), 0);
        assert_eq!(store.search("corp ").count(), 0);
    }

    #[test]
    fn test_fetch_is_idempotent() {
        let mut store = store();
        let before = store.clone();
        store.fetch_projects(&MockData);
        assert_eq!(store, before);
    }
}
