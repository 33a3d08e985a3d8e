mod gemini_client;
mod mock_gateway;

pub use gemini_client::*;
pub use mock_gateway::*;
