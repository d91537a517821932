//! User entity and role enumeration.

pub mod model;
pub mod role;

pub use model::{CreateUser, UpdateUser, User};
pub use role::Role;
