//! Client entity - an organisation commissioning projects from the firm.

use super::project::ProjectStatus;
use serde::{Deserialize, Serialize};

/// Clients share the project status vocabulary.
pub type ClientStatus = ProjectStatus;

/// Client record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier
    pub id: u32,
    /// Organisation name
    pub name: String,
    /// Industry sector
    pub industry: String,
    /// Main contact at the client
    pub contact_person: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// City and state
    pub location: String,
    /// Number of projects currently active
    pub active_projects: u32,
    /// Total contract value in whole currency units
    pub total_value: u64,
    /// Relationship status
    pub status: ClientStatus,
    /// Names of associated projects
    pub projects: Vec<String>,
}
