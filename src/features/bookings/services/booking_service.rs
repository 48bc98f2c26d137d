use std::sync::Arc;

use mongodb::bson::{doc, from_document, to_document, Document};

use crate::core::error::{AppError, Result};
use crate::core::store::{parse_object_id, DocumentStore, InsertSummary, UpdateSummary};
use crate::features::bookings::dtos::{BookingResponseDto, CreateBookingDto};
use crate::features::bookings::models::Booking;
use crate::shared::constants::{BOOKINGS_COLLECTION, RESULT_WINNER};

/// Service for booking operations
pub struct BookingService {
    store: Arc<dyn DocumentStore>,
}

impl BookingService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// List all submitted bookings
    pub async fn list(&self) -> Result<Vec<BookingResponseDto>> {
        let documents = self.store.find(BOOKINGS_COLLECTION, Document::new()).await?;
        documents.into_iter().map(decode_booking).collect()
    }

    /// List bookings registered by the given email
    pub async fn list_by_register_email(&self, email: &str) -> Result<Vec<BookingResponseDto>> {
        let documents = self
            .store
            .find(BOOKINGS_COLLECTION, doc! { "RegisterEmail": email })
            .await?;
        documents.into_iter().map(decode_booking).collect()
    }

    /// Insert a booking
    pub async fn create(&self, dto: CreateBookingDto) -> Result<InsertSummary> {
        let document = to_document(&dto).map_err(|e| {
            tracing::error!("Failed to encode booking document: {:?}", e);
            AppError::Internal(format!("Failed to encode booking document: {}", e))
        })?;

        let summary = self.store.insert_one(BOOKINGS_COLLECTION, document).await?;

        tracing::info!(
            "Booking created: id={}, register_email={}",
            summary.inserted_id,
            dto.register_email
        );

        Ok(summary)
    }

    /// Mark a booking as the winner
    pub async fn mark_winner(&self, id: &str) -> Result<UpdateSummary> {
        let oid = parse_object_id(id)?;

        self.store
            .update_one(
                BOOKINGS_COLLECTION,
                doc! { "_id": oid },
                doc! { "$set": { "result": RESULT_WINNER } },
                false,
            )
            .await
    }
}

fn decode_booking(document: Document) -> Result<BookingResponseDto> {
    from_document::<Booking>(document)
        .map(BookingResponseDto::from)
        .map_err(|e| {
            tracing::error!("Failed to decode booking document: {:?}", e);
            AppError::Internal(format!("Failed to decode booking document: {}", e))
        })
}
