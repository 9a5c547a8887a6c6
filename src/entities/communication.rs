//! Communication entities - chat rooms and the client-facing timeline.

use serde::{Deserialize, Serialize};

/// Project chat room summary
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRoom {
    /// Unique identifier
    pub id: u32,
    /// Room name, project and channel joined by a long dash
    pub name: String,
    /// Preview of the latest message
    pub last_message: String,
    /// Relative time of the latest message ("2 min ago")
    pub time: String,
    /// Unread message count
    pub unread: u32,
}

/// Milestone on a project timeline. Display order is array order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Short date label ("Feb 8")
    pub date: String,
    /// Milestone title
    pub title: String,
    /// One-line description
    pub description: String,
}
