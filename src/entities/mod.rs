//! Entity module - plain data types for everything the dashboard shows.
//! Records are created once from a data source and never mutated afterwards.

pub mod client;
pub mod communication;
pub mod invoice;
pub mod project;
pub mod task;
pub mod team;
pub mod user;

pub use client::{Client, ClientStatus};
pub use communication::{ChatRoom, TimelineEvent};
pub use invoice::{Invoice, InvoiceStatus, RevenueData};
pub use project::{Project, ProjectStatus, ProjectStatusData};
pub use task::{KanbanTask, TaskPriority, TaskStatus};
pub use team::{TeamMember, TeamMemberDetailed};
pub use user::{Role, User};
