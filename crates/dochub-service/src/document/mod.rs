//! Document use cases.

pub mod service;

pub use service::{CreateDocumentData, DocumentService, UpdateDocumentData};
