//! Conversation with the AI design assistant.
//!
//! Generation is simulated: every non-blank prompt is answered with a design
//! placeholder echoing the prompt. History lives only as long as the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    /// Prompt typed by the user
    User,
    /// Generated design
    Assistant,
}

/// One entry in the conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignMessage {
    /// Position in the conversation, starting at 1
    pub id: u64,
    /// Message text
    pub text: String,
    /// Author
    pub author: Author,
    /// When the message was added
    pub timestamp: DateTime<Utc>,
}

impl DesignMessage {
    /// Whether the message carries a design preview.
    #[must_use]
    pub fn has_preview(&self) -> bool {
        self.author == Author::Assistant
    }
}

/// Ordered message list for one session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DesignChat {
    messages: Vec<DesignMessage>,
}

impl DesignChat {
    /// Starts an empty conversation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Appends `prompt` and the generated reply. Blank prompts are ignored and
    /// return `None`.
    pub fn send(&mut self, prompt: &str, now: DateTime<Utc>) -> Option<&DesignMessage> {
        if prompt.trim().is_empty() {
            return None;
        }

        self.push(prompt.to_string(), Author::User, now);
        self.push(
            format!("Generated design for: \"{prompt}\""),
            Author::Assistant,
            now,
        );
        self.messages.last()
    }

    /// Drops the whole conversation ("New Chat").
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// All messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[DesignMessage] {
        &self.messages
    }

    /// The user's prompts, listed in the history sidebar.
    pub fn prompts(&self) -> impl Iterator<Item = &DesignMessage> {
        self.messages.iter().filter(|m| m.author == Author::User)
    }

    /// Whether nothing has been sent yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, text: String, author: Author, timestamp: DateTime<Utc>) {
        let id = self.messages.last().map_or(1, |m| m.id + 1);
        self.messages.push(DesignMessage {
            id,
            text,
            author,
            timestamp,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_appends_prompt_and_reply() {
        let mut chat = DesignChat::new();
        let reply = chat
            .send("a glass pavilion", Utc::now())
            .map(|m| m.text.clone());

        assert_eq!(
            reply.as_deref(),
            Some("Generated design for: \"a glass pavilion\"")
        );
        assert_eq!(chat.messages().len(), 2);
        assert_eq!(chat.messages()[0].author, Author::User);
        assert!(chat.messages()[1].has_preview());
    }

    #[test]
    fn test_blank_prompt_is_ignored() {
        let mut chat = DesignChat::new();
        assert!(chat.send("   \n", Utc::now()).is_none());
        assert!(chat.is_empty());
    }

    #[test]
    fn test_ids_increase() {
        let mut chat = DesignChat::new();
        chat.send("one", Utc::now());
        chat.send("two", Utc::now());
        let ids: Vec<_> = chat.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[test]
    fn test_prompts_lists_user_messages_only() {
        let mut chat = DesignChat::new();
        chat.send("one", Utc::now());
        chat.send("two", Utc::now());
        let prompts: Vec<_> = chat.prompts().map(|m| m.text.as_str()).collect();
        assert_eq!(prompts, ["one", "two"]);
    }

    #[test]
    fn test_clear_starts_over() {
        let mut chat = DesignChat::new();
        chat.send("one", Utc::now());
        chat.clear();
        assert!(chat.is_empty());
        chat.send("two", Utc::now());
        assert_eq!(chat.messages()[0].id, 1);
    }
}
