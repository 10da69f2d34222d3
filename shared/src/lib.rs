//! Shared utilities and common types for the TrackMail server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types driven by environment variables
//! - The uniform API error body
//! - Common type definitions

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{EmailConfig, Environment, ServerConfig};
pub use types::ErrorBody;
