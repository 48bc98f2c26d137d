pub mod payment_dto;

pub use payment_dto::{CreatePaymentIntentDto, PaymentIntentResponseDto, PriceInput};
