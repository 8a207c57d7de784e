//! Seed dataset and bulk-loading
//!
//! Seeding is an offline maintenance operation, never reachable from the
//! HTTP surface. It validates every record, clears the store, and bulk-loads
//! the fixed dataset.

use crate::core::company::{CompanyRecord, CompanySize};
use crate::core::error::DirectoryError;
use crate::core::service::CompanyStore;
use validator::Validate;

fn company(
    id: &str,
    name: &str,
    location: &str,
    industry: &str,
    size: CompanySize,
    founded: i32,
    website: &str,
    description: &str,
) -> CompanyRecord {
    CompanyRecord {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        industry: industry.to_string(),
        size,
        founded,
        website: website.to_string(),
        description: description.to_string(),
    }
}

/// The fixed seed dataset, ids assigned deterministically
pub fn seed_records() -> Vec<CompanyRecord> {
    vec![
        company(
            "cmp001",
            "Northwind Analytics",
            "New York, USA",
            "Analytics",
            CompanySize::UpTo500,
            2014,
            "https://northwind.io",
            "Delivers AI-assisted analytics for finance and operations teams.",
        ),
        company(
            "cmp002",
            "Evergreen Labs",
            "Portland, USA",
            "Climate Tech",
            CompanySize::UpTo100,
            2018,
            "https://evergreenlabs.com",
            "Builds SaaS for tracking carbon offsets and sustainability programs.",
        ),
        company(
            "cmp003",
            "Helios Robotics",
            "Munich, Germany",
            "Robotics",
            CompanySize::UpTo1000,
            2010,
            "https://heliosrobotics.de",
            "Manufactures autonomous mobile robots for logistics centers.",
        ),
        company(
            "cmp004",
            "Mariner Digital",
            "Toronto, Canada",
            "Marketing Tech",
            CompanySize::UpTo250,
            2016,
            "https://marinerdigital.ca",
            "Omnichannel marketing automation for mid-market retailers.",
        ),
        company(
            "cmp005",
            "Aurora Bio",
            "Boston, USA",
            "Biotech",
            CompanySize::Over1000,
            2007,
            "https://aurorabio.com",
            "R&D platform accelerating biologics discovery with cloud labs.",
        ),
        company(
            "cmp006",
            "Skyline Mobility",
            "Singapore",
            "Transportation",
            CompanySize::UpTo500,
            2012,
            "https://skylinemobility.sg",
            "Fleet management software powering electric micro-transit fleets.",
        ),
        company(
            "cmp007",
            "Atlas Pay",
            "London, UK",
            "Fintech",
            CompanySize::UpTo100,
            2019,
            "https://atlaspay.co",
            "Cross-border payments infrastructure for marketplaces.",
        ),
        company(
            "cmp008",
            "BluePeak Security",
            "Austin, USA",
            "Cybersecurity",
            CompanySize::UpTo250,
            2015,
            "https://bluepeaksec.com",
            "Managed detection and response platform for critical infrastructure.",
        ),
        company(
            "cmp009",
            "Coral Health",
            "Sydney, Australia",
            "Health Tech",
            CompanySize::UpTo500,
            2013,
            "https://coralhealth.au",
            "Remote patient monitoring and virtual care orchestration.",
        ),
        company(
            "cmp010",
            "Lumen Studio",
            "San Francisco, USA",
            "Design",
            CompanySize::UpTo50,
            2021,
            "https://lumen.studio",
            "Boutique design studio crafting immersive brand experiences.",
        ),
        company(
            "cmp011",
            "Swamy Studio",
            "San Francisco, USA",
            "Design",
            CompanySize::UpTo50,
            2021,
            "https://swamystudio.com",
            "Creative agency specializing in digital transformation and brand identity.",
        ),
        company(
            "cmp012",
            "Quantum Computing Labs",
            "Cambridge, UK",
            "Technology",
            CompanySize::UpTo250,
            2017,
            "https://quantumlabs.io",
            "Pioneering quantum computing solutions for enterprise applications.",
        ),
        company(
            "cmp013",
            "Green Energy Solutions",
            "Berlin, Germany",
            "Climate Tech",
            CompanySize::UpTo500,
            2015,
            "https://greenenergy.de",
            "Renewable energy management systems for smart cities.",
        ),
        company(
            "cmp014",
            "DataViz Pro",
            "Seattle, USA",
            "Analytics",
            CompanySize::UpTo100,
            2019,
            "https://datavizpro.com",
            "Advanced data visualization tools for business intelligence.",
        ),
        company(
            "cmp015",
            "CloudSync Technologies",
            "Dublin, Ireland",
            "Technology",
            CompanySize::UpTo1000,
            2011,
            "https://cloudsync.io",
            "Enterprise cloud synchronization and backup solutions.",
        ),
    ]
}

/// Validate the dataset, clear the store, and bulk-load
///
/// Returns the number of records loaded.
pub async fn seed(store: &dyn CompanyStore) -> Result<usize, DirectoryError> {
    let records = seed_records();

    for record in &records {
        record.validate().map_err(|e| DirectoryError::Validation {
            id: record.id.clone(),
            message: e.to_string(),
        })?;
    }

    let count = store.replace_all(records).await?;
    tracing::info!(count, "seeded company records");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryCompanyStore;
    use std::collections::HashSet;

    #[test]
    fn test_seed_records_all_valid() {
        for record in seed_records() {
            assert!(record.validate().is_ok(), "invalid seed record {}", record.id);
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let records = seed_records();
        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[tokio::test]
    async fn test_seed_clears_prior_contents() {
        let store = InMemoryCompanyStore::with_records(vec![company(
            "stale001",
            "Stale Co",
            "Nowhere",
            "Technology",
            CompanySize::UpTo50,
            2000,
            "https://stale.example.com",
            "Should be gone after seeding.",
        )]);

        let count = seed(&store).await.unwrap();
        assert_eq!(count, 15);

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 15);
        assert!(all.iter().all(|r| r.id != "stale001"));
    }
}
