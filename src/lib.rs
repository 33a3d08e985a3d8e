pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{AnalyzeImageUseCase, ChatTurnUseCase, ModelGateway};

pub use cli::Commands;

pub use connector::{Container, ContainerConfig, GeminiClient, MockGateway, Router};

pub use domain::{
    prompt_policy, ConversationSession, DomainError, ImageAnalysisRequest, ImageFormat, Message,
    Role,
};
