//! Client filter state
//!
//! An immutable value holding the current filter selections and page index.
//! Every transition is a discrete named action returning a new state, which
//! keeps transitions independently testable. Any filter change resets the
//! page to 1; shrinking results are handled by [`FilterState::clamped_to`].

use crate::core::criteria::FilterCriteria;
use crate::core::paginate::clamp_page;

/// Current filter selections plus the current page (1-based)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    criteria: FilterCriteria,
    page: usize,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    pub fn with_id(&self, value: &str) -> Self {
        self.updated(|c| c.id = text(value))
    }

    pub fn with_name(&self, value: &str) -> Self {
        self.updated(|c| c.name = text(value))
    }

    pub fn with_search(&self, value: &str) -> Self {
        self.updated(|c| c.search = text(value))
    }

    pub fn with_location(&self, value: &str) -> Self {
        self.updated(|c| c.location = categorical(value))
    }

    pub fn with_industry(&self, value: &str) -> Self {
        self.updated(|c| c.industry = categorical(value))
    }

    pub fn with_size(&self, value: &str) -> Self {
        self.updated(|c| c.size = categorical(value))
    }

    /// Clear every filter and return to the first page
    pub fn reset(&self) -> Self {
        Self::new()
    }

    /// Jump to a page; values below 1 are treated as 1
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            criteria: self.criteria.clone(),
            page: page.max(1),
        }
    }

    /// Pull the page back into range after the result list shrank
    pub fn clamped_to(&self, total_pages: usize) -> Self {
        Self {
            criteria: self.criteria.clone(),
            page: clamp_page(self.page, total_pages),
        }
    }

    fn updated(&self, apply: impl FnOnce(&mut FilterCriteria)) -> Self {
        let mut criteria = self.criteria.clone();
        apply(&mut criteria);
        // Filter changes always restart pagination.
        Self { criteria, page: 1 }
    }
}

fn text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn categorical(value: &str) -> Option<String> {
    text(value).filter(|v| v != "all")
}
