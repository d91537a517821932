//! Repository implementations.

pub mod document;
pub mod user;
