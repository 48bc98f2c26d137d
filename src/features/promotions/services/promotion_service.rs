use std::sync::Arc;

use mongodb::bson::{from_document, Document};

use crate::core::error::{AppError, Result};
use crate::core::store::DocumentStore;
use crate::features::promotions::dtos::PromotionResponseDto;
use crate::features::promotions::models::Promotion;
use crate::shared::constants::PROMOTIONS_COLLECTION;

/// Service for promotion reads
pub struct PromotionService {
    store: Arc<dyn DocumentStore>,
}

impl PromotionService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// List all promotion banners
    pub async fn list(&self) -> Result<Vec<PromotionResponseDto>> {
        let documents = self
            .store
            .find(PROMOTIONS_COLLECTION, Document::new())
            .await?;

        documents
            .into_iter()
            .map(|document| {
                from_document::<Promotion>(document)
                    .map(PromotionResponseDto::from)
                    .map_err(|e| {
                        tracing::error!("Failed to decode promotion document: {:?}", e);
                        AppError::Internal(format!("Failed to decode promotion document: {}", e))
                    })
            })
            .collect()
    }
}
