#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use mongodb::bson::{oid::ObjectId, Bson, Document};

#[cfg(test)]
use crate::core::error::Result;
#[cfg(test)]
use crate::core::store::{
    bson_id_to_string, DeleteSummary, DocumentStore, InsertSummary, UpdateSummary,
};
#[cfg(test)]
use crate::features::payments::gateway::{PaymentGateway, PaymentIntent};

/// In-memory `DocumentStore` covering the subset the services use: equality
/// filters, `$set`, `$push`, and upserts.
#[cfg(test)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

#[cfg(test)]
#[allow(dead_code)]
impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: Mutex::new(HashMap::new()),
        }
    }
}

#[cfg(test)]
fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[cfg(test)]
fn apply_update(document: &mut Document, update: &Document) {
    if let Ok(set) = update.get_document("$set") {
        for (key, value) in set {
            document.insert(key.clone(), value.clone());
        }
    }
    if let Ok(push) = update.get_document("$push") {
        for (key, value) in push {
            match document.get_array_mut(key) {
                Ok(array) => array.push(value.clone()),
                Err(_) => {
                    document.insert(key.clone(), Bson::Array(vec![value.clone()]));
                }
            }
        }
    }
}

#[cfg(test)]
#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>> {
        let collections = self.collections.lock().unwrap();
        let documents = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| matches_filter(d, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(documents)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>> {
        let collections = self.collections.lock().unwrap();
        let document = collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| matches_filter(d, &filter)).cloned());
        Ok(document)
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> Result<InsertSummary> {
        let id = match document.get("_id") {
            Some(id) => id.clone(),
            None => {
                let id = Bson::ObjectId(ObjectId::new());
                document.insert("_id", id.clone());
                id
            }
        };

        let mut collections = self.collections.lock().unwrap();
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(InsertSummary {
            inserted_id: bson_id_to_string(id),
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> Result<UpdateSummary> {
        let mut collections = self.collections.lock().unwrap();
        let documents = collections.entry(collection.to_string()).or_default();

        if let Some(document) = documents.iter_mut().find(|d| matches_filter(d, &filter)) {
            apply_update(document, &update);
            return Ok(UpdateSummary {
                matched_count: 1,
                modified_count: 1,
                upserted_id: None,
            });
        }

        if upsert {
            // Seed the new document from the filter's equality fields, then
            // apply the update to it, the way the real store composes upserts
            let id = Bson::ObjectId(ObjectId::new());
            let mut document = filter.clone();
            document.insert("_id", id.clone());
            apply_update(&mut document, &update);
            documents.push(document);
            return Ok(UpdateSummary {
                matched_count: 0,
                modified_count: 0,
                upserted_id: Some(bson_id_to_string(id)),
            });
        }

        Ok(UpdateSummary {
            matched_count: 0,
            modified_count: 0,
            upserted_id: None,
        })
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<DeleteSummary> {
        let mut collections = self.collections.lock().unwrap();
        let documents = collections.entry(collection.to_string()).or_default();

        let deleted_count = match documents.iter().position(|d| matches_filter(d, &filter)) {
            Some(index) => {
                documents.remove(index);
                1
            }
            None => 0,
        };

        Ok(DeleteSummary { deleted_count })
    }
}

/// `PaymentGateway` that records every call instead of reaching Stripe
#[cfg(test)]
pub struct RecordingGateway {
    calls: Mutex<Vec<(i64, String)>>,
}

#[cfg(test)]
#[allow(dead_code)]
impl RecordingGateway {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every (amount, currency) pair the service asked for, in order
    pub fn calls(&self) -> Vec<(i64, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn create_intent(&self, amount: i64, currency: &str) -> Result<PaymentIntent> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((amount, currency.to_string()));
        let n = calls.len();

        Ok(PaymentIntent {
            id: format!("pi_test_{}", n),
            client_secret: format!("pi_test_{}_secret", n),
        })
    }
}
