//! Substring search use cases.

pub mod service;

pub use service::SearchService;
