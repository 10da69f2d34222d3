//! Token storage implementations

pub mod memory;

pub use memory::MemoryTokenStore;
