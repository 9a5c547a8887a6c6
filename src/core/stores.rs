//! Shared handle over every domain store.
//!
//! Each store sits behind its own lock and exclusively owns its arrays. The
//! only write path is a refetch from the data source.

use crate::core::{
    client::ClientStore, communication::CommunicationStore, invoice::InvoiceStore,
    project::ProjectStore, task::TaskStore, team::TeamStore,
};
use crate::data::DataSource;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// The six domain stores plus the source they are filled from.
pub struct Stores {
    source: Arc<dyn DataSource>,
    /// Projects and status series
    pub projects: RwLock<ProjectStore>,
    /// Clients
    pub clients: RwLock<ClientStore>,
    /// Invoices and revenue series
    pub invoices: RwLock<InvoiceStore>,
    /// Kanban tasks
    pub tasks: RwLock<TaskStore>,
    /// Team members
    pub team: RwLock<TeamStore>,
    /// Chat rooms and timeline
    pub communication: RwLock<CommunicationStore>,
}

impl Stores {
    /// Creates every store, populated from `source`.
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        let src = source.as_ref();
        Self {
            projects: RwLock::new(ProjectStore::from_source(src)),
            clients: RwLock::new(ClientStore::from_source(src)),
            invoices: RwLock::new(InvoiceStore::from_source(src)),
            tasks: RwLock::new(TaskStore::from_source(src)),
            team: RwLock::new(TeamStore::from_source(src)),
            communication: RwLock::new(CommunicationStore::from_source(src)),
            source,
        }
    }

    /// Refetches every store from the data source.
    pub async fn fetch_all(&self) {
        info!("Refreshing domain stores...");
        let src = self.source.as_ref();
        self.projects.write().await.fetch_projects(src);
        self.clients.write().await.fetch_clients(src);
        self.invoices.write().await.fetch_invoices(src);
        self.tasks.write().await.fetch_tasks(src);
        self.team.write().await.fetch_team(src);
        self.communication.write().await.fetch_communication(src);
        info!("Domain stores refreshed.");
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}
