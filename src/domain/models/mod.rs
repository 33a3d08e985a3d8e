mod image;
mod message;
mod session;

pub use image::*;
pub use message::*;
pub use session::*;
