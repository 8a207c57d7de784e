//! In-memory company store for testing, development, and offline mode

use crate::core::company::CompanyRecord;
use crate::core::filter::CompanyQuery;
use crate::core::service::CompanyStore;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory store implementation
///
/// Records are held in insertion order. Uses RwLock for thread-safe access;
/// queries are evaluated with the canonical predicate, so this backend and
/// the document-store backend agree on filter semantics by construction.
#[derive(Clone)]
pub struct InMemoryCompanyStore {
    records: Arc<RwLock<Vec<CompanyRecord>>>,
}

impl InMemoryCompanyStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Build a store pre-loaded with the given records
    pub fn with_records(records: Vec<CompanyRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl Default for InMemoryCompanyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanyStore for InMemoryCompanyStore {
    async fn find(&self, query: &CompanyQuery) -> Result<Vec<CompanyRecord>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<CompanyRecord>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.clone())
    }

    async fn replace_all(&self, new_records: Vec<CompanyRecord>) -> Result<usize> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let count = new_records.len();
        *records = new_records;

        Ok(count)
    }
}
