//! # Application Layer
//!
//! Use cases orchestrating one user action each, plus the gateway port
//! they call out through.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
