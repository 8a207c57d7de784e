//! Filter criteria for listing requests
//!
//! A criterion that is absent means "no constraint on that attribute". The
//! legacy UI sent the sentinel string `"all"` for the categorical dropdowns;
//! that sentinel (and any blank value) is normalized to `None` at this edge so
//! the rest of the crate only ever deals with the explicit optional form.

use serde::{Deserialize, Serialize};

/// One set of filter selections, one per request/interaction
///
/// Never persisted. Construct via [`FilterCriteria::from_params`] when the
/// values come from an untrusted edge (query string, UI form) so that
/// trimming and sentinel normalization are applied consistently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact-id lookup; when present all other criteria are ignored
    pub id: Option<String>,

    /// Case-insensitive exact match on the full name
    pub name: Option<String>,

    /// Case-insensitive substring match on name OR description
    pub search: Option<String>,

    pub location: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
}

/// Raw query parameters as they arrive on `GET /api/companies`
///
/// All optional, all strings; unknown parameters are ignored by serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    pub id: Option<String>,
    pub name: Option<String>,
    pub search: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
}

impl FilterCriteria {
    /// Normalize raw parameters into criteria
    ///
    /// Values are trimmed. Blank values become `None` for every field; the
    /// `"all"` sentinel additionally becomes `None` for the categorical
    /// fields (`location`, `industry`, `size`). Never fails.
    pub fn from_params(params: ListingParams) -> Self {
        Self {
            id: normalize(params.id),
            name: normalize(params.name),
            search: normalize(params.search),
            location: normalize_categorical(params.location),
            industry: normalize_categorical(params.industry),
            size: normalize_categorical(params.size),
        }
    }

    /// True when no constraint is set at all
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_none()
            && self.search.is_none()
            && self.location.is_none()
            && self.industry.is_none()
            && self.size.is_none()
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn normalize_categorical(value: Option<String>) -> Option<String> {
    normalize(value).filter(|v| v != "all")
}
