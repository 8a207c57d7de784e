//! Core domain types: the company record, filter criteria, the canonical
//! filter predicate, pagination, and the listing service.

pub mod company;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod paginate;
pub mod service;

pub use company::{CompanyRecord, CompanySize};
pub use criteria::{FilterCriteria, ListingParams};
pub use error::DirectoryError;
pub use filter::{evaluate, CompanyQuery, Conjunction};
pub use paginate::{clamp_page, page_window, paginate, total_pages, PageMeta};
pub use service::{CompanyStore, ListingService};
