//! Common type definitions shared across server modules

pub mod response;

pub use response::ErrorBody;
