//! Command implementations.

pub mod hash;
pub mod parse;
pub mod types;
