use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};
use mongodb::Database;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};

/// Acknowledgement of a single-document insert
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertSummary {
    pub inserted_id: String,
}

/// Acknowledgement of a single-document update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

/// Acknowledgement of a single-document delete
///
/// A delete that matched nothing is still a success with `deleted_count: 0`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSummary {
    pub deleted_count: u64,
}

/// Collection-scoped document store.
///
/// Services receive this seam instead of a raw database handle so the whole
/// request surface can run against an in-memory store in tests. Updates are
/// atomic at the single-document level; there are no cross-document
/// transactions.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>>;

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>>;

    async fn insert_one(&self, collection: &str, document: Document) -> Result<InsertSummary>;

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> Result<UpdateSummary>;

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<DeleteSummary>;
}

/// `DocumentStore` backed by a MongoDB database handle
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>> {
        let cursor = self.db.collection::<Document>(collection).find(filter).await?;
        let documents = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>> {
        let document = self
            .db
            .collection::<Document>(collection)
            .find_one(filter)
            .await?;
        Ok(document)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<InsertSummary> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;
        Ok(InsertSummary {
            inserted_id: bson_id_to_string(result.inserted_id),
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> Result<UpdateSummary> {
        let result = self
            .db
            .collection::<Document>(collection)
            .update_one(filter, update)
            .upsert(upsert)
            .await?;
        Ok(UpdateSummary {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.map(bson_id_to_string),
        })
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<DeleteSummary> {
        let result = self
            .db
            .collection::<Document>(collection)
            .delete_one(filter)
            .await?;
        Ok(DeleteSummary {
            deleted_count: result.deleted_count,
        })
    }
}

/// Render a store-generated id as the plain string clients see
pub fn bson_id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

/// Parse a client-supplied id into the store's ObjectId form.
///
/// Ids arrive as path segments or body fields; a malformed one is the
/// caller's error, not the store's.
pub fn parse_object_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::BadRequest(format!("Invalid id: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_id_round_trips_through_the_string_form() {
        let oid = ObjectId::new();
        let parsed = parse_object_id(&oid.to_hex()).unwrap();
        assert_eq!(parsed, oid);
    }

    #[test]
    fn malformed_ids_are_bad_requests() {
        for bad in ["", "nope", "123", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
            assert!(matches!(
                parse_object_id(bad),
                Err(AppError::BadRequest(_))
            ));
        }
    }

    #[test]
    fn inserted_id_renders_as_plain_hex() {
        let oid = ObjectId::new();
        assert_eq!(bson_id_to_string(Bson::ObjectId(oid)), oid.to_hex());
        assert_eq!(bson_id_to_string(Bson::String("abc".into())), "abc");
    }
}
