//! Communication store - chat rooms and the client timeline.

use crate::{
    data::DataSource,
    entities::{ChatRoom, TimelineEvent},
};
use tracing::debug;

/// Read-only view over chat rooms and timeline events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommunicationStore {
    chat_rooms: Vec<ChatRoom>,
    timeline_events: Vec<TimelineEvent>,
}

impl CommunicationStore {
    /// Builds a store populated from `source`.
    #[must_use]
    pub fn from_source(source: &dyn DataSource) -> Self {
        let mut store = Self::default();
        store.fetch_communication(source);
        store
    }

    /// Re-assigns rooms and events from `source`.
    pub fn fetch_communication(&mut self, source: &dyn DataSource) {
        self.chat_rooms = source.chat_rooms();
        self.timeline_events = source.timeline_events();
        debug!(
            rooms = self.chat_rooms.len(),
            events = self.timeline_events.len(),
            "Fetched communication"
        );
    }

    #[must_use]
    pub fn chat_rooms(&self) -> &[ChatRoom] {
        &self.chat_rooms
    }

    /// Timeline, newest first.
    #[must_use]
    pub fn timeline_events(&self) -> &[TimelineEvent] {
        &self.timeline_events
    }

    #[must_use]
    pub fn room_by_id(&self, id: u32) -> Option<&ChatRoom> {
        self.chat_rooms.iter().find(|r| r.id == id)
    }

    /// Unread messages across every room.
    #[must_use]
    pub fn total_unread(&self) -> u32 {
        self.chat_rooms.iter().map(|r| r.unread).sum()
    }
}
