use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn gateway(msg: impl Into<String>) -> Self {
        Self::Gateway(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_gateway(&self) -> bool {
        matches!(self, Self::Gateway(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// The bare failure cause, without the variant prefix.
    ///
    /// Used when a failure is rendered into a transcript as
    /// `"An error occurred: <cause>"`.
    pub fn cause(&self) -> String {
        match self {
            Self::Configuration(msg)
            | Self::Gateway(msg)
            | Self::InvalidInput(msg)
            | Self::Internal(msg) => msg.clone(),
            Self::IoError(e) => e.to_string(),
        }
    }
}
