//! HTTP request handlers, organized by domain.

pub mod auth;
pub mod document;
pub mod health;
pub mod role;
pub mod search;
pub mod user;
