//! # dochub-service
//!
//! Business logic service layer for DocHub. Each service orchestrates
//! repositories, authentication, and the authorization policy to
//! implement application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod document;
pub mod search;
pub mod user;

pub use auth::AuthService;
pub use context::RequestContext;
pub use document::DocumentService;
pub use search::SearchService;
pub use user::UserService;
