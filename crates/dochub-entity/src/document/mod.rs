//! Document entity and access tier enumeration.

pub mod access;
pub mod model;

pub use access::AccessTier;
pub use model::{CreateDocument, Document, UpdateDocument};
