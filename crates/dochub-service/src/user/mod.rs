//! User account use cases.

pub mod service;

pub use service::{UpdateUserData, UserService};
