//! Data sources feeding the domain stores.
//!
//! Stores never build records themselves; they pull everything from a
//! [`DataSource`]. Today the only implementation is [`MockData`], the fixed
//! hand-authored data set. A real backend would implement the same trait.

mod mock;

pub use mock::MockData;

use crate::entities::{
    ChatRoom, Client, Invoice, KanbanTask, Project, ProjectStatusData, RevenueData, TeamMember,
    TeamMemberDetailed, TimelineEvent,
};

/// Supplies the arrays held by the domain stores.
///
/// Every method is synchronous and infallible: the mock source has no
/// latency and nothing that can fail.
pub trait DataSource: Send + Sync {
    /// All projects
    fn projects(&self) -> Vec<Project>;
    /// Monthly project-status chart series
    fn project_status_data(&self) -> Vec<ProjectStatusData>;
    /// All clients
    fn clients(&self) -> Vec<Client>;
    /// All invoices
    fn invoices(&self) -> Vec<Invoice>;
    /// Monthly revenue series
    fn revenue_data(&self) -> Vec<RevenueData>;
    /// Team members in summary form
    fn team_members(&self) -> Vec<TeamMember>;
    /// Team members with contact details
    fn team_members_detailed(&self) -> Vec<TeamMemberDetailed>;
    /// Kanban tasks
    fn kanban_tasks(&self) -> Vec<KanbanTask>;
    /// Chat rooms
    fn chat_rooms(&self) -> Vec<ChatRoom>;
    /// Client-facing timeline, newest first
    fn timeline_events(&self) -> Vec<TimelineEvent>;
}
