use serde::{Deserialize, Serialize};

use super::{Message, Role};

/// Ordered message history for one chat thread.
///
/// The session is strictly append-only between resets and assumes a
/// single writer: the shell serializes user actions, so there is never
/// more than one in-flight turn mutating it. Nothing is persisted; the
/// session lives and dies with its UI client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationSession {
    messages: Vec<Message>,
    /// Assistant greeting re-seeded on every reset, when configured.
    welcome: Option<String>,
}

impl ConversationSession {
    /// An empty session with no welcome policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that opens with the given assistant greeting and
    /// re-seeds it after every reset.
    pub fn with_welcome(text: impl Into<String>) -> Self {
        let mut session = Self {
            messages: Vec::new(),
            welcome: Some(text.into()),
        };
        session.seed_welcome();
        session
    }

    /// Append one message to the end of the history.
    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }

    /// Clear the history and re-seed the welcome message if one is
    /// configured. Idempotent: resetting twice leaves the same state as
    /// resetting once.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.seed_welcome();
    }

    /// Read-only view of the history, oldest first.
    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    fn seed_welcome(&mut self) {
        if let Some(text) = &self.welcome {
            self.messages.push(Message::assistant(text.clone()));
        }
    }
}
