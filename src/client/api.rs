//! HTTP client for the listing endpoint

use crate::config::ClientConfig;
use crate::core::company::CompanyRecord;
use crate::core::criteria::FilterCriteria;
use serde::Deserialize;
use thiserror::Error;

/// How much of a malformed body to echo back in diagnostics
const SNIPPET_LEN: usize = 120;

/// Failure taxonomy for a listing fetch
///
/// Every kind is terminal for the triggering request; nothing retries
/// automatically. Transport failures are the ones a UI would pair with a
/// retry affordance.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The endpoint could not be reached at all
    #[error("network error reaching the directory API: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status
    #[error("Backend returned HTTP {0}")]
    Status(u16),

    /// The body was not JSON, or did not have the expected shape
    #[error("malformed response body: {message} (body starts with: {snippet:?})")]
    MalformedBody { message: String, snippet: String },
}

impl ClientError {
    /// True for failures worth an immediate user-facing retry button
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}

/// Wire shape of a successful listing response
///
/// `data` is defaulted so a technically well-formed but empty envelope
/// still decodes, matching what the historical frontend tolerated.
#[derive(Debug, Deserialize)]
struct ListingEnvelope {
    #[allow(dead_code)]
    success: bool,
    #[allow(dead_code)]
    #[serde(default)]
    count: usize,
    #[serde(default)]
    data: Vec<CompanyRecord>,
}

/// Client for the company listing API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Query pairs for the given criteria, in the endpoint's parameter order
    ///
    /// Absent criteria contribute nothing — never an empty-string parameter.
    pub fn query_pairs(criteria: &FilterCriteria) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = &criteria.id {
            pairs.push(("id", id.clone()));
        }
        if let Some(name) = &criteria.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(search) = &criteria.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(location) = &criteria.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(industry) = &criteria.industry {
            pairs.push(("industry", industry.clone()));
        }
        if let Some(size) = &criteria.size {
            pairs.push(("size", size.clone()));
        }
        pairs
    }

    /// Fetch the filtered company list
    pub async fn fetch_companies(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<CompanyRecord>, ClientError> {
        let url = format!("{}/companies", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&Self::query_pairs(criteria))
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let envelope: ListingEnvelope =
            serde_json::from_str(&body).map_err(|e| ClientError::MalformedBody {
                message: e.to_string(),
                snippet: body.chars().take(SNIPPET_LEN).collect(),
            })?;

        Ok(envelope.data)
    }
}
