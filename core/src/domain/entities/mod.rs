//! Business entities

pub mod verification_token;

pub use verification_token::{VerificationToken, DEFAULT_TTL_HOURS, TOKEN_BYTES};
