use std::sync::Arc;

use mongodb::bson::{from_document, to_document, Document};

use crate::core::error::{AppError, Result};
use crate::core::store::{DocumentStore, InsertSummary};
use crate::features::favorites::dtos::{AddFavoriteDto, FavoriteResponseDto};
use crate::features::favorites::models::Favorite;
use crate::shared::constants::FAVORITES_COLLECTION;

/// Service for favorite operations
pub struct FavoriteService {
    store: Arc<dyn DocumentStore>,
}

impl FavoriteService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// List all favorites
    pub async fn list(&self) -> Result<Vec<FavoriteResponseDto>> {
        let documents = self
            .store
            .find(FAVORITES_COLLECTION, Document::new())
            .await?;
        documents.into_iter().map(decode_favorite).collect()
    }

    /// Insert a favorite.
    ///
    /// Favoriting the same contest twice inserts two documents; nothing
    /// deduplicates the pairing.
    pub async fn add(&self, dto: AddFavoriteDto) -> Result<InsertSummary> {
        let document = to_document(&dto).map_err(|e| {
            tracing::error!("Failed to encode favorite document: {:?}", e);
            AppError::Internal(format!("Failed to encode favorite document: {}", e))
        })?;

        let summary = self.store.insert_one(FAVORITES_COLLECTION, document).await?;

        tracing::info!(
            "Favorite added: id={}, user={}, contest={}",
            summary.inserted_id,
            dto.user_email,
            dto.contest_id
        );

        Ok(summary)
    }
}

fn decode_favorite(document: Document) -> Result<FavoriteResponseDto> {
    from_document::<Favorite>(document)
        .map(FavoriteResponseDto::from)
        .map_err(|e| {
            tracing::error!("Failed to decode favorite document: {:?}", e);
            AppError::Internal(format!("Failed to decode favorite document: {}", e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::MemoryStore;

    fn service() -> FavoriteService {
        FavoriteService::new(Arc::new(MemoryStore::new()))
    }

    fn add_dto() -> AddFavoriteDto {
        AddFavoriteDto {
            user_email: "alice@example.com".to_string(),
            contest_id: "abc123".to_string(),
            contest_name: Some("Logo sprint".to_string()),
            image: None,
        }
    }

    #[tokio::test]
    async fn added_favorites_come_back_in_the_listing() {
        let favorites = service();

        let summary = favorites.add(add_dto()).await.unwrap();
        assert!(!summary.inserted_id.is_empty());

        let all = favorites.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].user_email, "alice@example.com");
        assert_eq!(all[0].contest_id, "abc123");
    }

    #[tokio::test]
    async fn the_same_pairing_can_be_favorited_twice() {
        let favorites = service();

        favorites.add(add_dto()).await.unwrap();
        favorites.add(add_dto()).await.unwrap();

        assert_eq!(favorites.list().await.unwrap().len(), 2);
    }
}
