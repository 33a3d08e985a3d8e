mod analyze_image;
mod chat_turn;

pub use analyze_image::*;
pub use chat_turn::*;
