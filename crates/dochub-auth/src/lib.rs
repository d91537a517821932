//! # dochub-auth
//!
//! Authentication and authorization building blocks: Argon2id password
//! hashing, signed time-limited identity tokens, and the pure policy
//! functions that decide document and user access.

pub mod jwt;
pub mod password;
pub mod policy;
