//! Store trait and listing service

use crate::core::company::CompanyRecord;
use crate::core::criteria::FilterCriteria;
use crate::core::filter::CompanyQuery;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-oriented access to the company record collection
///
/// The runtime core only ever reads and filters records; `replace_all` exists
/// for the offline seeding operation and is never reachable from the HTTP
/// surface.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Fetch records matching the query, in store order
    async fn find(&self, query: &CompanyQuery) -> Result<Vec<CompanyRecord>>;

    /// Fetch every record
    async fn list_all(&self) -> Result<Vec<CompanyRecord>>;

    /// Clear the collection and bulk-load the given records
    ///
    /// Returns the number of records loaded.
    async fn replace_all(&self, records: Vec<CompanyRecord>) -> Result<usize>;
}

/// Executes listing requests: build the query, run it, sort the result
#[derive(Clone)]
pub struct ListingService {
    store: Arc<dyn CompanyStore>,
}

impl ListingService {
    pub fn new(store: Arc<dyn CompanyStore>) -> Self {
        Self { store }
    }

    /// Return the full filtered set, sorted by name ascending
    ///
    /// No server-side pagination: the entire matching set comes back in one
    /// response. Store failures surface as-is; the HTTP layer maps them to
    /// the fixed internal-error response without retrying.
    pub async fn list(&self, criteria: &FilterCriteria) -> Result<Vec<CompanyRecord>> {
        let query = CompanyQuery::build(criteria);
        let mut records = self.store.find(&query).await?;
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }
}
