//! Password hashing.

pub mod hasher;

pub use hasher::{hash, verify};
