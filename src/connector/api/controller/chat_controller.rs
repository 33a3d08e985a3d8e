use anyhow::Result;

use crate::domain::{Message, Role};

use super::super::Container;

/// Shell-facing chat surface: submit a turn, reset the conversation,
/// render the transcript.
pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Run one chat turn and return the rendered, updated transcript.
    pub async fn submit(&self, text: &str) -> Result<String> {
        let use_case = self.container.chat_use_case();
        let mut session = self.container.session().lock().await;

        use_case.execute(&mut session, text).await?;

        Ok(Self::format_transcript(session.snapshot()))
    }

    /// Run one chat turn and return only the assistant's reply, for
    /// the REPL where earlier turns are already on screen.
    pub async fn submit_for_reply(&self, text: &str) -> Result<Option<String>> {
        let use_case = self.container.chat_use_case();
        let mut session = self.container.session().lock().await;

        let before = session.len();
        use_case.execute(&mut session, text).await?;

        if session.len() == before {
            // Empty submission: nothing was appended.
            return Ok(None);
        }

        Ok(session.last().map(|m| m.content().to_string()))
    }

    /// Clear the conversation and return the fresh transcript (the
    /// welcome message, when one is configured).
    pub async fn reset(&self) -> Result<String> {
        let mut session = self.container.session().lock().await;
        session.reset();

        if session.is_empty() {
            Ok("Conversation cleared.".to_string())
        } else {
            Ok(format!(
                "Conversation cleared.\n\n{}",
                Self::format_transcript(session.snapshot())
            ))
        }
    }

    fn format_transcript(messages: &[Message]) -> String {
        let mut output = String::new();

        for message in messages {
            let speaker = match message.role() {
                Role::User => "You",
                Role::Assistant => "MediAssist",
            };
            output.push_str(&format!("{}: {}\n\n", speaker, message.content()));
        }

        output.trim_end().to_string()
    }
}
