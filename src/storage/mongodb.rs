//! MongoDB storage backend using the official MongoDB async driver.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag:
//! ```toml
//! [dependencies]
//! company-directory = { version = "0.1", features = ["mongodb_backend"] }
//! ```
//!
//! # Storage model
//!
//! Records live in a single collection. The externally assigned `id` field is
//! stored as a regular field, distinct from MongoDB's internal `_id`.
//! `CompanyQuery` translates to a BSON filter document: case-insensitive
//! `$regex` for the name and search predicates (`$or` over name+description)
//! and plain equality for the categorical fields. Regex metacharacters in
//! user input are escaped before being embedded in a pattern.

use crate::core::company::CompanyRecord;
use crate::core::filter::CompanyQuery;
use crate::core::service::CompanyStore;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

/// Default collection name, matching the historical deployment
pub const DEFAULT_COLLECTION: &str = "comp";

/// Company store backed by a MongoDB collection
#[derive(Clone, Debug)]
pub struct MongoCompanyStore {
    collection: Collection<CompanyRecord>,
}

impl MongoCompanyStore {
    /// Create a store over the default collection of the given database
    pub fn new(database: Database) -> Self {
        Self::with_collection(database, DEFAULT_COLLECTION)
    }

    pub fn with_collection(database: Database, name: &str) -> Self {
        Self {
            collection: database.collection(name),
        }
    }

    /// Create the supporting indexes
    ///
    /// Equality indexes on `location`, `industry`, `size` plus a compound
    /// text index over `name` + `description`. Idempotent; intended to be
    /// called once at startup or from the seeding operation.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let indexes = vec![
            IndexModel::builder().keys(doc! { "id": 1 }).build(),
            IndexModel::builder().keys(doc! { "location": 1 }).build(),
            IndexModel::builder().keys(doc! { "industry": 1 }).build(),
            IndexModel::builder().keys(doc! { "size": 1 }).build(),
            IndexModel::builder()
                .keys(doc! { "name": "text", "description": "text" })
                .options(IndexOptions::builder().name("name_description_text".to_string()).build())
                .build(),
        ];

        self.collection
            .create_indexes(indexes)
            .await
            .map_err(|e| anyhow!("Failed to create indexes: {}", e))?;

        Ok(())
    }

    /// Translate a query into a BSON filter document
    fn filter_document(query: &CompanyQuery) -> Document {
        match query {
            CompanyQuery::ById(id) => doc! { "id": id },
            CompanyQuery::Conjunction(conj) => {
                let mut filter = Document::new();

                if let Some(name) = &conj.name {
                    filter.insert(
                        "name",
                        doc! { "$regex": format!("^{}$", regex::escape(name)), "$options": "i" },
                    );
                }
                if let Some(search) = &conj.search {
                    let pattern = regex::escape(search);
                    filter.insert(
                        "$or",
                        vec![
                            doc! { "name": { "$regex": &pattern, "$options": "i" } },
                            doc! { "description": { "$regex": &pattern, "$options": "i" } },
                        ],
                    );
                }
                if let Some(location) = &conj.location {
                    filter.insert("location", location);
                }
                if let Some(industry) = &conj.industry {
                    filter.insert("industry", industry);
                }
                if let Some(size) = &conj.size {
                    filter.insert("size", size);
                }

                filter
            }
        }
    }
}

#[async_trait]
impl CompanyStore for MongoCompanyStore {
    async fn find(&self, query: &CompanyQuery) -> Result<Vec<CompanyRecord>> {
        let filter = Self::filter_document(query);
        let cursor = self
            .collection
            .find(filter)
            .await
            .map_err(|e| anyhow!("MongoDB find failed: {}", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| anyhow!("MongoDB cursor failed: {}", e))
    }

    async fn list_all(&self) -> Result<Vec<CompanyRecord>> {
        self.find(&CompanyQuery::Conjunction(Default::default()))
            .await
    }

    async fn replace_all(&self, records: Vec<CompanyRecord>) -> Result<usize> {
        self.collection
            .delete_many(doc! {})
            .await
            .map_err(|e| anyhow!("MongoDB delete_many failed: {}", e))?;

        if records.is_empty() {
            return Ok(0);
        }

        let count = records.len();
        self.collection
            .insert_many(records)
            .await
            .map_err(|e| anyhow!("MongoDB insert_many failed: {}", e))?;

        Ok(count)
    }
}
