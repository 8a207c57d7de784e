//! Storage backends for the company record collection
//!
//! The in-memory backend is the default and doubles as the offline-mode
//! store; the MongoDB backend is gated behind the `mongodb_backend` feature.

pub mod in_memory;

#[cfg(feature = "mongodb_backend")]
pub mod mongodb;

pub use in_memory::InMemoryCompanyStore;

#[cfg(feature = "mongodb_backend")]
pub use mongodb::MongoCompanyStore;
