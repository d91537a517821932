//! Authentication use cases.

pub mod service;

pub use service::{AuthSession, AuthService, SigninData, SignupData};
