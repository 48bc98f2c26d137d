use std::sync::Arc;

use chrono::Utc;
use mongodb::bson::{doc, from_document, to_document, Document};

use crate::core::error::{AppError, Result};
use crate::core::store::{DeleteSummary, DocumentStore, UpdateSummary};
use crate::features::users::dtos::{
    UpdateRoleDto, UpsertUserDto, UpsertUserResponseDto, UserResponseDto,
};
use crate::features::users::models::User;
use crate::shared::constants::USERS_COLLECTION;

/// Service for user operations
pub struct UserService {
    store: Arc<dyn DocumentStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<UserResponseDto>> {
        let documents = self.store.find(USERS_COLLECTION, Document::new()).await?;
        documents.into_iter().map(decode_user).collect()
    }

    /// Fetch one user by email; an absent user is not an error
    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserResponseDto>> {
        let document = self
            .store
            .find_one(USERS_COLLECTION, doc! { "email": email })
            .await?;
        document.map(decode_user).transpose()
    }

    /// Upsert a user keyed by email.
    ///
    /// If a document for the email already exists it is returned untouched;
    /// role/status claimed by the later call do not merge into it.
    pub async fn upsert(&self, dto: UpsertUserDto) -> Result<UpsertUserResponseDto> {
        let filter = doc! { "email": &dto.email };

        if let Some(existing) = self.store.find_one(USERS_COLLECTION, filter.clone()).await? {
            return Ok(UpsertUserResponseDto::Existing(decode_user(existing)?));
        }

        let mut fields = to_document(&dto).map_err(|e| {
            tracing::error!("Failed to encode user document: {:?}", e);
            AppError::Internal(format!("Failed to encode user document: {}", e))
        })?;
        fields.insert("timestamp", Utc::now().timestamp_millis());

        let summary = self
            .store
            .update_one(USERS_COLLECTION, filter, doc! { "$set": fields }, true)
            .await?;

        tracing::info!("User upserted: email={}", dto.email);

        Ok(UpsertUserResponseDto::Upserted(summary))
    }

    /// Set a user's role by email, refreshing the timestamp
    pub async fn update_role(&self, dto: UpdateRoleDto) -> Result<UpdateSummary> {
        let update = doc! {
            "$set": {
                "role": &dto.role,
                "timestamp": Utc::now().timestamp_millis(),
            }
        };

        self.store
            .update_one(USERS_COLLECTION, doc! { "email": &dto.email }, update, false)
            .await
    }

    /// Delete a user by email
    pub async fn delete_by_email(&self, email: &str) -> Result<DeleteSummary> {
        self.store
            .delete_one(USERS_COLLECTION, doc! { "email": email })
            .await
    }
}

fn decode_user(document: Document) -> Result<UserResponseDto> {
    from_document::<User>(document)
        .map(UserResponseDto::from)
        .map_err(|e| {
            tracing::error!("Failed to decode user document: {:?}", e);
            AppError::Internal(format!("Failed to decode user document: {}", e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::MemoryStore;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;

    fn service() -> (UserService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (UserService::new(Arc::clone(&store) as Arc<dyn DocumentStore>), store)
    }

    fn upsert_dto(email: &str) -> UpsertUserDto {
        UpsertUserDto {
            email: email.to_string(),
            name: Some("Alice".to_string()),
            role: Some("user".to_string()),
            status: None,
        }
    }

    #[tokio::test]
    async fn upserting_the_same_email_twice_never_creates_a_second_document() {
        let (users, store) = service();
        let email: String = SafeEmail().fake();

        let first = users.upsert(upsert_dto(&email)).await.unwrap();
        assert!(matches!(first, UpsertUserResponseDto::Upserted(ref s) if s.upserted_id.is_some()));

        let second = users.upsert(upsert_dto(&email)).await.unwrap();
        match second {
            UpsertUserResponseDto::Existing(user) => assert_eq!(user.email, email),
            other => panic!("expected the stored document back, got {:?}", other),
        }

        let stored = store
            .find(USERS_COLLECTION, doc! { "email": &email })
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn second_upsert_does_not_merge_new_role_or_status() {
        let (users, _) = service();
        let email: String = SafeEmail().fake();

        users.upsert(upsert_dto(&email)).await.unwrap();

        let mut changed = upsert_dto(&email);
        changed.role = Some("admin".to_string());
        changed.status = Some("Verified".to_string());
        users.upsert(changed).await.unwrap();

        let stored = users.get_by_email(&email).await.unwrap().unwrap();
        assert_eq!(stored.role.as_deref(), Some("user"));
        assert_eq!(stored.status, None);
    }

    #[tokio::test]
    async fn update_role_overwrites_and_refreshes_timestamp() {
        let (users, _) = service();
        let email: String = SafeEmail().fake();
        users.upsert(upsert_dto(&email)).await.unwrap();

        let summary = users
            .update_role(UpdateRoleDto {
                email: email.clone(),
                role: "creator".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(summary.matched_count, 1);

        let stored = users.get_by_email(&email).await.unwrap().unwrap();
        assert_eq!(stored.role.as_deref(), Some("creator"));
        assert!(stored.timestamp.is_some());
    }

    #[tokio::test]
    async fn missing_user_reads_as_none_and_deletes_as_zero() {
        let (users, _) = service();

        assert!(users.get_by_email("ghost@example.com").await.unwrap().is_none());

        let summary = users.delete_by_email("ghost@example.com").await.unwrap();
        assert_eq!(summary.deleted_count, 0);
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_addressed_user() {
        let (users, _) = service();
        users.upsert(upsert_dto("keep@example.com")).await.unwrap();
        users.upsert(upsert_dto("drop@example.com")).await.unwrap();

        let summary = users.delete_by_email("drop@example.com").await.unwrap();
        assert_eq!(summary.deleted_count, 1);

        let remaining = users.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].email, "keep@example.com");
    }
}
