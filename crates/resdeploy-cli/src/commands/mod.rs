//! Command implementations.

pub mod copy;
pub mod write;
