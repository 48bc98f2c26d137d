use std::sync::Arc;

use mongodb::bson::{doc, from_document, to_document, Document};

use crate::core::error::{AppError, Result};
use crate::core::store::{parse_object_id, DeleteSummary, DocumentStore, InsertSummary, UpdateSummary};
use crate::features::contests::dtos::{AppendCommentDto, ContestResponseDto, CreateContestDto};
use crate::features::contests::models::Contest;
use crate::shared::constants::{CONTESTS_COLLECTION, STATUS_APPROVED, STATUS_PENDING};

/// Service for contest operations
pub struct ContestService {
    store: Arc<dyn DocumentStore>,
}

impl ContestService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// List all contests
    pub async fn list(&self) -> Result<Vec<ContestResponseDto>> {
        let documents = self.store.find(CONTESTS_COLLECTION, Document::new()).await?;
        documents.into_iter().map(decode_contest).collect()
    }

    /// List contests whose Category equals the search term exactly
    pub async fn search_by_category(&self, search: &str) -> Result<Vec<ContestResponseDto>> {
        let documents = self
            .store
            .find(CONTESTS_COLLECTION, doc! { "Category": search })
            .await?;
        documents.into_iter().map(decode_contest).collect()
    }

    /// List the contest(s) matching an id.
    ///
    /// Kept list-shaped: clients iterate this response the same way they
    /// iterate the other contest listings.
    pub async fn list_by_id(&self, id: &str) -> Result<Vec<ContestResponseDto>> {
        let oid = parse_object_id(id)?;
        let documents = self
            .store
            .find(CONTESTS_COLLECTION, doc! { "_id": oid })
            .await?;
        documents.into_iter().map(decode_contest).collect()
    }

    /// List contests created by the given email
    pub async fn list_by_creator(&self, email: &str) -> Result<Vec<ContestResponseDto>> {
        let documents = self
            .store
            .find(CONTESTS_COLLECTION, doc! { "CreatorEmail": email })
            .await?;
        documents.into_iter().map(decode_contest).collect()
    }

    /// Insert a contest; it starts pending with no participants and no
    /// comments
    pub async fn create(&self, dto: CreateContestDto) -> Result<InsertSummary> {
        let mut document = to_document(&dto).map_err(|e| {
            tracing::error!("Failed to encode contest document: {:?}", e);
            AppError::Internal(format!("Failed to encode contest document: {}", e))
        })?;
        document.insert("status", STATUS_PENDING);
        document.insert("participantsCount", 0i64);
        document.insert("comment", Vec::<String>::new());

        let summary = self.store.insert_one(CONTESTS_COLLECTION, document).await?;

        tracing::info!(
            "Contest created: id={}, creator={}",
            summary.inserted_id,
            dto.creator_email
        );

        Ok(summary)
    }

    /// Append one comment to a contest, preserving the order of earlier
    /// entries
    pub async fn append_comment(&self, dto: AppendCommentDto) -> Result<UpdateSummary> {
        let oid = parse_object_id(&dto.id)?;

        self.store
            .update_one(
                CONTESTS_COLLECTION,
                doc! { "_id": oid },
                doc! { "$push": { "comment": &dto.comment } },
                false,
            )
            .await
    }

    /// Set a contest's status to the approved literal, whatever it was before
    pub async fn approve(&self, id: &str) -> Result<UpdateSummary> {
        let oid = parse_object_id(id)?;

        self.store
            .update_one(
                CONTESTS_COLLECTION,
                doc! { "_id": oid },
                doc! { "$set": { "status": STATUS_APPROVED } },
                false,
            )
            .await
    }

    /// Replace a contest's participant count.
    ///
    /// The route reads as "add" but the stored count is overwritten, not
    /// incremented.
    pub async fn set_participants_count(&self, id: &str, count: i64) -> Result<UpdateSummary> {
        let oid = parse_object_id(id)?;

        self.store
            .update_one(
                CONTESTS_COLLECTION,
                doc! { "_id": oid },
                doc! { "$set": { "participantsCount": count } },
                false,
            )
            .await
    }

    /// Delete a contest by id; an unknown id acknowledges zero deletes
    pub async fn delete(&self, id: &str) -> Result<DeleteSummary> {
        let oid = parse_object_id(id)?;

        self.store
            .delete_one(CONTESTS_COLLECTION, doc! { "_id": oid })
            .await
    }
}

fn decode_contest(document: Document) -> Result<ContestResponseDto> {
    from_document::<Contest>(document)
        .map(ContestResponseDto::from)
        .map_err(|e| {
            tracing::error!("Failed to decode contest document: {:?}", e);
            AppError::Internal(format!("Failed to decode contest document: {}", e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::MemoryStore;

    fn service() -> ContestService {
        ContestService::new(Arc::new(MemoryStore::new()))
    }

    fn create_dto(creator: &str, category: &str) -> CreateContestDto {
        CreateContestDto {
            contest_name: Some("Logo sprint".to_string()),
            image: None,
            creator_email: creator.to_string(),
            category: category.to_string(),
            description: None,
            price: Some(5.0),
            prize_money: Some(100.0),
            task_submission: None,
            deadline: None,
        }
    }

    #[tokio::test]
    async fn created_contest_starts_pending_with_empty_comments() {
        let contests = service();

        let summary = contests
            .create(create_dto("creator@example.com", "design"))
            .await
            .unwrap();

        let stored = contests.list_by_id(&summary.inserted_id).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].status, "pending");
        assert_eq!(stored[0].participants_count, 0);
        assert!(stored[0].comment.is_empty());
    }

    #[tokio::test]
    async fn category_search_matches_exact_field_equality() {
        let contests = service();
        contests
            .create(create_dto("a@example.com", "design"))
            .await
            .unwrap();
        contests
            .create(create_dto("b@example.com", "writing"))
            .await
            .unwrap();

        let hits = contests.search_by_category("design").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, "design");

        // Substrings do not match
        assert!(contests.search_by_category("des").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn creator_listing_returns_only_that_creators_contests() {
        let contests = service();
        contests
            .create(create_dto("mine@example.com", "design"))
            .await
            .unwrap();
        contests
            .create(create_dto("mine@example.com", "writing"))
            .await
            .unwrap();
        contests
            .create(create_dto("other@example.com", "design"))
            .await
            .unwrap();

        let mine = contests.list_by_creator("mine@example.com").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|c| c.creator_email == "mine@example.com"));
    }

    #[tokio::test]
    async fn each_comment_append_grows_the_sequence_by_one_in_order() {
        let contests = service();
        let id = contests
            .create(create_dto("creator@example.com", "design"))
            .await
            .unwrap()
            .inserted_id;

        for text in ["first", "second", "third"] {
            let summary = contests
                .append_comment(AppendCommentDto {
                    id: id.clone(),
                    comment: text.to_string(),
                })
                .await
                .unwrap();
            assert_eq!(summary.matched_count, 1);
        }

        let stored = contests.list_by_id(&id).await.unwrap();
        assert_eq!(stored[0].comment, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn approve_sets_the_literal_status_regardless_of_prior_value() {
        let contests = service();
        let id = contests
            .create(create_dto("creator@example.com", "design"))
            .await
            .unwrap()
            .inserted_id;

        contests.approve(&id).await.unwrap();
        // A second approval is a no-op in effect, not an error
        contests.approve(&id).await.unwrap();

        let stored = contests.list_by_id(&id).await.unwrap();
        assert_eq!(stored[0].status, "Approved");
    }

    #[tokio::test]
    async fn participant_count_is_overwritten_not_incremented() {
        let contests = service();
        let id = contests
            .create(create_dto("creator@example.com", "design"))
            .await
            .unwrap()
            .inserted_id;

        contests.set_participants_count(&id, 7).await.unwrap();
        contests.set_participants_count(&id, 3).await.unwrap();

        let stored = contests.list_by_id(&id).await.unwrap();
        assert_eq!(stored[0].participants_count, 3);
    }

    #[tokio::test]
    async fn deleting_an_unknown_id_acknowledges_zero_deletes() {
        let contests = service();

        let summary = contests
            .delete("badcafebadcafebadcafe123")
            .await
            .unwrap();

        assert_eq!(summary.deleted_count, 0);
    }

    #[tokio::test]
    async fn an_unparseable_id_is_a_bad_request() {
        let contests = service();

        let err = contests.list_by_id("not-an-object-id").await.unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
