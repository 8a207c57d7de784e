//! Headless client for the directory: filter state, fetching, pagination
//!
//! Two modes share the same canonical filter semantics: networked (fetch the
//! filtered list from the API) and offline (evaluate filters locally over a
//! resident record list, optionally loaded from a static JSON fixture file).

pub mod api;
pub mod session;
pub mod state;

pub use api::{ApiClient, ClientError};
pub use session::{Debouncer, DirectorySession, FilterOptions, RequestSequencer, SEARCH_DEBOUNCE};
pub use state::FilterState;
