//! # Connector Layer
//!
//! External integrations implementing the application ports:
//! - Model gateway (Gemini REST API, scripted mock for offline use)
//! - CLI shell wiring (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
