//! Route handlers for the HTTP surface

pub mod email;
pub mod health;
pub mod token;
