mod model_gateway;

pub use model_gateway::*;
