//! # dochub-database
//!
//! PostgreSQL persistence layer: connection pool management, the
//! migration runner, and the user/document repositories.

pub mod connection;
pub mod migration;
pub mod repositories;
