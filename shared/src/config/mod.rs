//! Configuration modules for the TrackMail server
//!
//! All configuration is read from environment variables (optionally loaded
//! from a `.env` file by the binary) with sensible development defaults.

pub mod email;
pub mod environment;
pub mod server;

pub use email::EmailConfig;
pub use environment::Environment;
pub use server::ServerConfig;
