use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::codec;
use crate::db::models::{CatalogEntity, Draft};
use crate::db::store::{DocumentStore, Filter};
use crate::error::ServiceError;

/// Hard cap on unfiltered listings, matching the store adapter's contract.
const LIST_CAP: usize = 1000;

/// Typed CRUD over the schemaless document store. One repository serves all
/// entity kinds; the entity type picks the collection.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn DocumentStore>,
}

impl Repository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Validate a draft, assign id and creation timestamp, persist, and
    /// return the fully populated entity. One atomic document insert; a
    /// failure propagates with no partial state left behind.
    pub async fn create<D: Draft>(&self, draft: D) -> Result<D::Entity, ServiceError> {
        let entity = draft.build(Uuid::new_v4().to_string(), Utc::now())?;
        self.insert(&entity).await?;
        Ok(entity)
    }

    /// Persist an already-built entity (seed data, chat exchanges,
    /// itineraries).
    pub async fn insert<E: CatalogEntity>(&self, entity: &E) -> Result<(), ServiceError> {
        let doc = codec::to_document(entity)?;
        self.store.insert_one(E::COLLECTION, doc).await?;
        Ok(())
    }

    /// List entities matching the filter, in store-native order, capped at
    /// 1000 records.
    pub async fn list<E: CatalogEntity>(&self, filter: Filter) -> Result<Vec<E>, ServiceError> {
        self.find(filter, LIST_CAP).await
    }

    pub async fn find<E: CatalogEntity>(
        &self,
        filter: Filter,
        limit: usize,
    ) -> Result<Vec<E>, ServiceError> {
        let docs = self.store.find(E::COLLECTION, &filter, limit).await?;
        docs.into_iter()
            .map(|doc| codec::from_document(doc).map_err(ServiceError::from))
            .collect()
    }

    pub async fn get_by_id<E: CatalogEntity>(&self, id: &str) -> Result<E, ServiceError> {
        let filter = Filter::new().eq("id", id);
        let mut found = self.find::<E>(filter, 1).await?;
        found.pop().ok_or(ServiceError::NotFound(E::KIND))
    }
}
