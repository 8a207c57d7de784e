//! Filter builder and canonical predicate
//!
//! This is the single source of truth for filter semantics. The server
//! listing path builds a [`CompanyQuery`] and hands it to the store; the
//! offline/local path evaluates the same query directly over an in-memory
//! record list. Both paths therefore agree on precedence and matching rules.

use crate::core::company::CompanyRecord;
use crate::core::criteria::FilterCriteria;

/// A store-executable query built from [`FilterCriteria`]
///
/// Construction never fails: malformed or empty criteria are treated as
/// absent, not rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum CompanyQuery {
    /// Exact lookup by external id. Short-circuits every other criterion.
    ById(String),

    /// Conjunction of the accumulated per-field predicates
    Conjunction(Conjunction),
}

/// Independent predicates, all of which must hold
///
/// `name` is a case-insensitive exact match anchored on the full value;
/// `search` is a case-insensitive substring match over name OR description.
/// The two compose (a record must satisfy both when both are present) — the
/// historical behavior, kept pending product clarification on whether `name`
/// should short-circuit `search` the way `id` does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conjunction {
    pub name: Option<String>,
    pub search: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
}

impl Conjunction {
    /// True when no predicate is set (matches every record)
    pub fn is_unconstrained(&self) -> bool {
        self.name.is_none()
            && self.search.is_none()
            && self.location.is_none()
            && self.industry.is_none()
            && self.size.is_none()
    }
}

impl CompanyQuery {
    /// Build a query from criteria, applying the fixed precedence order
    ///
    /// A present `id` wins outright. Otherwise the remaining criteria
    /// accumulate independently; absence means "no constraint", never
    /// "match empty string".
    pub fn build(criteria: &FilterCriteria) -> Self {
        if let Some(id) = &criteria.id {
            return CompanyQuery::ById(id.clone());
        }

        CompanyQuery::Conjunction(Conjunction {
            name: criteria.name.clone(),
            search: criteria.search.clone(),
            location: criteria.location.clone(),
            industry: criteria.industry.clone(),
            size: criteria.size.clone(),
        })
    }

    /// Evaluate this query against a single record
    pub fn matches(&self, record: &CompanyRecord) -> bool {
        match self {
            CompanyQuery::ById(id) => record.id == *id,
            CompanyQuery::Conjunction(conj) => {
                if let Some(name) = &conj.name {
                    // Unicode folding, to stay in agreement with the
                    // case-insensitive regex the document store evaluates.
                    if record.name.to_lowercase() != name.to_lowercase() {
                        return false;
                    }
                }
                if let Some(search) = &conj.search {
                    let needle = search.to_lowercase();
                    let in_name = record.name.to_lowercase().contains(&needle);
                    let in_description = record.description.to_lowercase().contains(&needle);
                    if !in_name && !in_description {
                        return false;
                    }
                }
                if let Some(location) = &conj.location {
                    if record.location != *location {
                        return false;
                    }
                }
                if let Some(industry) = &conj.industry {
                    if record.industry != *industry {
                        return false;
                    }
                }
                if let Some(size) = &conj.size {
                    if record.size.as_str() != size {
                        return false;
                    }
                }
                true
            }
        }
    }
}

/// Filter an in-memory record list by criteria
///
/// Mirror of the server listing path for the mode where the whole list is
/// already resident. Pure and idempotent; input order is preserved (no
/// independent sort is applied).
pub fn evaluate(records: &[CompanyRecord], criteria: &FilterCriteria) -> Vec<CompanyRecord> {
    let query = CompanyQuery::build(criteria);
    records
        .iter()
        .filter(|record| query.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::company::CompanySize;

    fn record(id: &str, name: &str, location: &str, industry: &str, size: CompanySize) -> CompanyRecord {
        CompanyRecord {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            industry: industry.to_string(),
            size,
            founded: 2015,
            website: format!("https://{}.example.com", id),
            description: format!("{} builds software.", name),
        }
    }

    fn fixtures() -> Vec<CompanyRecord> {
        vec![
            record(
                "cmp001",
                "Northwind Analytics",
                "New York, USA",
                "Analytics",
                CompanySize::UpTo500,
            ),
            record(
                "cmp002",
                "Evergreen Labs",
                "Portland, USA",
                "Climate Tech",
                CompanySize::UpTo100,
            ),
            record(
                "cmp003",
                "Helios Robotics",
                "Munich, Germany",
                "Robotics",
                CompanySize::UpTo1000,
            ),
        ]
    }

    fn criteria() -> FilterCriteria {
        FilterCriteria::default()
    }

    #[test]
    fn test_id_short_circuits_other_criteria() {
        let with_extra = FilterCriteria {
            id: Some("cmp001".to_string()),
            name: Some("ignored".to_string()),
            search: Some("ignored too".to_string()),
            ..criteria()
        };
        let only_id = FilterCriteria {
            id: Some("cmp001".to_string()),
            ..criteria()
        };
        assert_eq!(CompanyQuery::build(&with_extra), CompanyQuery::build(&only_id));
    }

    #[test]
    fn test_id_lookup_ignores_name() {
        let c = FilterCriteria {
            id: Some("cmp001".to_string()),
            name: Some("Evergreen Labs".to_string()),
            ..criteria()
        };
        let matched = evaluate(&fixtures(), &c);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "cmp001");
    }

    #[test]
    fn test_name_match_is_case_insensitive_and_anchored() {
        let c = FilterCriteria {
            name: Some("northwind analytics".to_string()),
            ..criteria()
        };
        assert_eq!(evaluate(&fixtures(), &c).len(), 1);

        // Substrings must not match the exact-name predicate.
        let partial = FilterCriteria {
            name: Some("Northwind".to_string()),
            ..criteria()
        };
        assert!(evaluate(&fixtures(), &partial).is_empty());
    }

    #[test]
    fn test_name_match_folds_non_ascii_case() {
        let cafe = record(
            "cmp010",
            "Café Velo",
            "Lyon, France",
            "Transportation",
            CompanySize::UpTo50,
        );
        let c = FilterCriteria {
            name: Some("CAFÉ VELO".to_string()),
            ..criteria()
        };
        assert_eq!(evaluate(&[cafe], &c).len(), 1);
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let c = FilterCriteria {
            search: Some("analytics".to_string()),
            ..criteria()
        };
        let matched = evaluate(&fixtures(), &c);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Northwind Analytics");

        // "software" only appears in the generated descriptions.
        let c = FilterCriteria {
            search: Some("SOFTWARE".to_string()),
            ..criteria()
        };
        assert_eq!(evaluate(&fixtures(), &c).len(), 3);
    }

    #[test]
    fn test_name_and_search_compose() {
        let c = FilterCriteria {
            name: Some("Evergreen Labs".to_string()),
            search: Some("robots".to_string()),
            ..criteria()
        };
        // Name matches cmp002 but the search term does not appear there.
        assert!(evaluate(&fixtures(), &c).is_empty());
    }

    #[test]
    fn test_categorical_filters_are_exact() {
        let c = FilterCriteria {
            industry: Some("Climate Tech".to_string()),
            ..criteria()
        };
        let matched = evaluate(&fixtures(), &c);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Evergreen Labs");

        let c = FilterCriteria {
            size: Some("500-1000".to_string()),
            ..criteria()
        };
        assert_eq!(evaluate(&fixtures(), &c)[0].id, "cmp003");
    }

    #[test]
    fn test_location_filter_only_returns_that_location() {
        let c = FilterCriteria {
            location: Some("Portland, USA".to_string()),
            ..criteria()
        };
        for matched in evaluate(&fixtures(), &c) {
            assert_eq!(matched.location, "Portland, USA");
        }
    }

    #[test]
    fn test_unknown_size_bucket_matches_nothing() {
        let c = FilterCriteria {
            size: Some("medium".to_string()),
            ..criteria()
        };
        assert!(evaluate(&fixtures(), &c).is_empty());
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        assert_eq!(evaluate(&fixtures(), &criteria()).len(), 3);
    }

    #[test]
    fn test_evaluate_is_idempotent_and_order_preserving() {
        let c = FilterCriteria {
            search: Some("software".to_string()),
            ..criteria()
        };
        let once = evaluate(&fixtures(), &c);
        let twice = evaluate(&once, &c);
        assert_eq!(once, twice);
        let ids: Vec<&str> = once.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["cmp001", "cmp002", "cmp003"]);
    }
}
