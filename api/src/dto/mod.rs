//! Request and response DTOs for the HTTP surface

pub mod email;
pub mod token;
