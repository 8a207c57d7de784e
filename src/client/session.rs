//! Directory browsing session
//!
//! Drives the full client loop: filter state, fetching (networked or
//! offline), pagination, and the two temporal behaviors around fetching —
//! a fixed debounce applied only while a free-text search term is present,
//! and sequence tagging so a stale response never overwrites newer data.

use crate::client::api::{ApiClient, ClientError};
use crate::client::state::FilterState;
use crate::config::ClientConfig;
use crate::core::company::CompanyRecord;
use crate::core::filter::evaluate;
use crate::core::paginate::{paginate, total_pages, PageMeta};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Delay before a fetch while a search term is present
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Supersedable delay gate
///
/// Every input change bumps the generation. A waiter that went to sleep on
/// an older generation finds out on waking and drops its fetch, so only the
/// most recent state within the delay window actually triggers one.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an input change; returns the new generation
    pub fn notify(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Wait out the delay; true if the generation is still current after it
    pub async fn settle(&self, generation: u64, delay: Duration) -> bool {
        tokio::time::sleep(delay).await;
        self.current() == generation
    }
}

/// Monotonic tagging of outgoing requests
///
/// In-flight fetches are not cancelled; instead each carries a sequence
/// number and only the newest-tagged response may be applied, so the last
/// response to resolve cannot clobber newer data.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    next: AtomicU64,
    newest_applied: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag an outgoing request
    pub fn begin(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Attempt to apply a response; false means it was stale
    pub fn try_commit(&self, seq: u64) -> bool {
        let mut newest = self.newest_applied.load(Ordering::SeqCst);
        loop {
            if seq <= newest {
                return false;
            }
            match self.newest_applied.compare_exchange(
                newest,
                seq,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return true,
                Err(actual) => newest = actual,
            }
        }
    }
}

/// Where the session gets its records from
#[derive(Debug)]
enum Mode {
    /// Fetch from the listing API
    Remote(ApiClient),

    /// Evaluate filters locally over a resident record list
    Offline(Vec<CompanyRecord>),
}

/// One user's browsing session over the directory
///
/// Holds the last successfully displayed list. A failed refresh preserves
/// that list and records the error; re-triggering is always explicit
/// (another refresh or a filter change).
#[derive(Debug)]
pub struct DirectorySession {
    mode: Mode,
    page_size: usize,
    state: FilterState,
    companies: Vec<CompanyRecord>,
    last_error: Option<ClientError>,
    debouncer: Debouncer,
    sequencer: RequestSequencer,
}

impl DirectorySession {
    /// Networked session against the configured API base URL
    pub fn remote(config: &ClientConfig) -> Self {
        Self::with_mode(Mode::Remote(ApiClient::new(config)), config.page_size)
    }

    /// Offline session over an in-memory record list
    pub fn offline(records: Vec<CompanyRecord>, page_size: usize) -> Self {
        Self::with_mode(Mode::Offline(records), page_size)
    }

    /// Offline session loading its records from a static JSON fixture file
    ///
    /// Accepts either a bare array of records or the listing envelope shape
    /// (`{ "success": ..., "count": ..., "data": [...] }`), so a captured API
    /// response can be dropped in as-is.
    pub fn offline_from_fixture(path: &str, page_size: usize) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&content)?;

        let records: Vec<CompanyRecord> = match value {
            serde_json::Value::Array(_) => serde_json::from_value(value)?,
            serde_json::Value::Object(mut map) => {
                let data = map
                    .remove("data")
                    .ok_or_else(|| anyhow::anyhow!("fixture object has no 'data' field"))?;
                serde_json::from_value(data)?
            }
            _ => anyhow::bail!("fixture must be a JSON array or a listing envelope"),
        };

        Ok(Self::offline(records, page_size))
    }

    fn with_mode(mode: Mode, page_size: usize) -> Self {
        Self {
            mode,
            page_size: page_size.max(1),
            state: FilterState::new(),
            companies: Vec::new(),
            last_error: None,
            debouncer: Debouncer::new(),
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn last_error(&self) -> Option<&ClientError> {
        self.last_error.as_ref()
    }

    /// Apply a state transition (filter change, reset, page change)
    ///
    /// Notifies the debouncer so a pending delayed fetch is superseded.
    pub fn apply(&mut self, next: FilterState) {
        self.state = next;
        self.debouncer.notify();
    }

    /// Refresh the displayed list, honoring the search debounce
    ///
    /// Returns `Ok(false)` when the fetch was superseded by a newer input
    /// change inside the delay window.
    pub async fn refresh_debounced(&mut self) -> Result<bool, ClientError> {
        if self.state.criteria().search.is_some() {
            let generation = self.debouncer.current();
            if !self.debouncer.settle(generation, SEARCH_DEBOUNCE).await {
                return Ok(false);
            }
        }
        self.refresh().await.map(|_| true)
    }

    /// Refresh the displayed list immediately
    ///
    /// On success the result replaces the displayed list and the current page
    /// is clamped to the new page count. On failure the previous list stays
    /// visible and the error is recorded.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let seq = self.sequencer.begin();
        let result = match &self.mode {
            Mode::Remote(client) => client.fetch_companies(self.state.criteria()).await,
            Mode::Offline(records) => Ok(evaluate(records, self.state.criteria())),
        };

        match result {
            Ok(companies) => {
                if self.sequencer.try_commit(seq) {
                    let pages = total_pages(companies.len(), self.page_size);
                    self.state = self.state.clamped_to(pages);
                    self.companies = companies;
                    self.last_error = None;
                } else {
                    tracing::debug!(seq, "discarding stale listing response");
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "listing refresh failed");
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// The rows for the current page, with pagination metadata
    pub fn current_page(&self) -> (Vec<CompanyRecord>, PageMeta) {
        paginate(&self.companies, self.page_size, self.state.page())
    }

    /// Distinct, sorted option values for the categorical filter dropdowns
    pub fn filter_options(&self) -> FilterOptions {
        let mut locations: Vec<String> =
            self.companies.iter().map(|c| c.location.clone()).collect();
        let mut industries: Vec<String> =
            self.companies.iter().map(|c| c.industry.clone()).collect();
        let mut sizes: Vec<String> = self
            .companies
            .iter()
            .map(|c| c.size.as_str().to_string())
            .collect();
        for list in [&mut locations, &mut industries, &mut sizes] {
            list.sort();
            list.dedup();
        }
        FilterOptions {
            locations,
            industries,
            sizes,
        }
    }
}

/// Unique values observed in the displayed list, for dropdown population
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub industries: Vec<String>,
    pub sizes: Vec<String>,
}
