//! Client store - the firm's client companies.

use crate::{
    core::search,
    data::DataSource,
    entities::{Client, ClientStatus},
};
use tracing::debug;

/// Read-only view over the client list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientStore {
    clients: Vec<Client>,
}

impl ClientStore {
    /// Builds a store populated from `source`.
    #[must_use]
    pub fn from_source(source: &dyn DataSource) -> Self {
        let mut store = Self::default();
        store.fetch_clients(source);
        store
    }

    /// Re-assigns the client list from `source`.
    pub fn fetch_clients(&mut self, source: &dyn DataSource) {
        self.clients = source.clients();
        debug!(clients = self.clients.len(), "Fetched clients");
    }

    /// All clients in source order.
    #[must_use]
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Clients with an `active` relationship.
    pub fn active_clients(&self) -> impl Iterator<Item = &Client> {
        self.clients
            .iter()
            .filter(|c| c.status == ClientStatus::Active)
    }

    /// Client with the given id.
    #[must_use]
    pub fn client_by_id(&self, id: u32) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Clients whose company name or contact person contains `query`.
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Client> + 'a {
        self.clients.iter().filter(move |c| {
            search::matches_any(&[c.name.as_str(), c.contact_person.as_str()], query)
        })
    }
}
