use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{AnalyzeImageUseCase, ChatTurnUseCase, ModelGateway};
use crate::domain::ConversationSession;
use crate::{GeminiClient, MockGateway};

/// Assistant greeting seeded into fresh and reset sessions.
const WELCOME_MESSAGE: &str =
    "Hello! I'm MediAssist, your AI medical assistant. Ask me any medical question.";

/// Canned reply used by `--mock` runs so the CLI works without a key
/// or network access.
const MOCK_REPLY: &str =
    "This is a mock response. Run without --mock to reach the Gemini API.";

pub struct ContainerConfig {
    /// Use the scripted mock gateway instead of the Gemini API.
    pub mock: bool,
    /// Override the gateway model name.
    pub model: Option<String>,
    /// Seed a welcome message into fresh and reset sessions.
    pub welcome: bool,
}

/// Wires the gateway adapter, the conversation session, and the use
/// cases together for the CLI shell.
///
/// The container owns exactly one [`ConversationSession`] — one shell
/// instance, one conversation. The session sits behind a mutex so
/// controllers can stay `&self`; user actions are serialized by the
/// shell (the REPL blocks on each turn), so the lock is never
/// contended.
pub struct Container {
    gateway: Arc<dyn ModelGateway>,
    session: Mutex<ConversationSession>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let gateway: Arc<dyn ModelGateway> = if config.mock {
            debug!("Using mock model gateway");
            Arc::new(MockGateway::returning(MOCK_REPLY))
        } else {
            // Missing GOOGLE_API_KEY fails here, once, before any call.
            let mut client = GeminiClient::from_env()?;
            if let Some(model) = &config.model {
                debug!("Using Gemini model override: {}", model);
                client = client.with_model(model);
            }
            Arc::new(client)
        };

        let session = if config.welcome {
            ConversationSession::with_welcome(WELCOME_MESSAGE)
        } else {
            ConversationSession::new()
        };

        Ok(Self {
            gateway,
            session: Mutex::new(session),
        })
    }

    pub fn chat_use_case(&self) -> ChatTurnUseCase {
        ChatTurnUseCase::new(self.gateway.clone())
    }

    pub fn analyze_use_case(&self) -> AnalyzeImageUseCase {
        AnalyzeImageUseCase::new(self.gateway.clone())
    }

    pub fn session(&self) -> &Mutex<ConversationSession> {
        &self.session
    }

    pub fn model_name(&self) -> String {
        self.gateway.model_name().to_string()
    }
}
