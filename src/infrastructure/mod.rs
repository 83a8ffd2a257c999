//! Adapters for the domain ports.

pub mod console;
pub mod in_memory;
pub mod simulated;
