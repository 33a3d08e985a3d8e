use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::ModelGateway;
use crate::domain::{prompt_policy, ConversationSession, DomainError, Role};

/// One chat turn: accept a user query, call the gateway, record both
/// sides in the session.
///
/// The flow is synchronous and sequential — append the user turn, build
/// the prompt, invoke the gateway, append the assistant turn. A gateway
/// failure is not an error for the caller: it is recorded as a regular
/// assistant message (`"An error occurred: <cause>"`) so the transcript
/// stays a complete audit trail of attempts. No retries, no timeouts,
/// no partial updates happen at this layer.
pub struct ChatTurnUseCase {
    gateway: Arc<dyn ModelGateway>,
}

impl ChatTurnUseCase {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Process one user query against the given session.
    ///
    /// Empty or whitespace-only input is a no-op: the shell suppresses
    /// it, and a session is never mutated by a blank submission.
    pub async fn execute(
        &self,
        session: &mut ConversationSession,
        query: &str,
    ) -> Result<(), DomainError> {
        if query.trim().is_empty() {
            debug!("Ignoring empty chat submission");
            return Ok(());
        }

        info!("Chat turn with {}", self.gateway.model_name());
        let start_time = Instant::now();

        session.append(Role::User, query);

        let prompt = prompt_policy::build_chat_prompt(query);
        let reply = match self.gateway.generate_text(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Gateway call failed: {e}");
                format!("An error occurred: {}", e.cause())
            }
        };

        session.append(Role::Assistant, reply);

        info!(
            "Turn completed in {:.2}s ({} messages in session)",
            start_time.elapsed().as_secs_f64(),
            session.len()
        );

        Ok(())
    }
}
