use std::sync::Arc;

use mongodb::bson::to_document;

use crate::core::error::{AppError, Result};
use crate::core::store::{DocumentStore, InsertSummary};
use crate::features::requests::dtos::CreateRequestDto;
use crate::shared::constants::REQUESTS_COLLECTION;

/// Service for contest-review requests; write-only on this surface
pub struct RequestService {
    store: Arc<dyn DocumentStore>,
}

impl RequestService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Insert a contest-review request
    pub async fn create(&self, dto: CreateRequestDto) -> Result<InsertSummary> {
        let document = to_document(&dto).map_err(|e| {
            tracing::error!("Failed to encode request document: {:?}", e);
            AppError::Internal(format!("Failed to encode request document: {}", e))
        })?;

        let summary = self.store.insert_one(REQUESTS_COLLECTION, document).await?;

        tracing::info!(
            "Contest request created: id={}, creator={}",
            summary.inserted_id,
            dto.creator_email
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::MemoryStore;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn requests_land_in_the_requests_collection() {
        let store = Arc::new(MemoryStore::new());
        let requests = RequestService::new(Arc::clone(&store) as Arc<dyn DocumentStore>);

        let summary = requests
            .create(CreateRequestDto {
                contest_name: Some("Poster jam".to_string()),
                image: None,
                creator_email: "creator@example.com".to_string(),
                category: Some("design".to_string()),
                description: None,
                price: None,
                prize_money: Some(50.0),
                task_submission: None,
                deadline: None,
            })
            .await
            .unwrap();
        assert!(!summary.inserted_id.is_empty());

        let stored = store
            .find(REQUESTS_COLLECTION, doc! { "CreatorEmail": "creator@example.com" })
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(
            stored[0].get_str("ContestName").unwrap(),
            "Poster jam"
        );
    }
}
