//! # dochub-entity
//!
//! Domain models for DocHub: users with roles, and documents with
//! access tiers. Models derive `sqlx::FromRow` / `sqlx::Type` so the
//! repository layer can map rows directly.

pub mod document;
pub mod user;
