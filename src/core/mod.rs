//! Shared data types and the crate error.

pub mod data;
pub mod errors;

pub use data::*;
pub use errors::*;
