mod analyze_controller;
mod chat_controller;

pub use analyze_controller::*;
pub use chat_controller::*;
