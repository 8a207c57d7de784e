//! # Company Directory
//!
//! A read-oriented company directory: an HTTP backend exposing a single
//! filterable listing endpoint over a company-record collection, and a
//! headless client that holds filter state, fetches (or locally evaluates)
//! the list, and paginates it.
//!
//! Filter semantics live in one canonical module ([`core::filter`]) used by
//! both the server listing path and the client's offline path, so the two
//! cannot drift apart.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use company_directory::prelude::*;
//!
//! let store = Arc::new(InMemoryCompanyStore::new());
//! seed(store.as_ref()).await?;
//!
//! let state = AppState::new(ListingService::new(store));
//! let app = build_router(state);
//! // axum::serve(listener, app).await?;
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod seed;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::client::{ApiClient, ClientError, DirectorySession, FilterState};
    pub use crate::config::{ClientConfig, ServerConfig};
    pub use crate::core::{
        evaluate, paginate, CompanyQuery, CompanyRecord, CompanySize, CompanyStore,
        DirectoryError, FilterCriteria, ListingService, PageMeta,
    };
    pub use crate::seed::{seed, seed_records};
    pub use crate::server::{build_router, AppState};
    pub use crate::storage::InMemoryCompanyStore;
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoCompanyStore;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
}
