pub mod auth;
pub mod bookings;
pub mod contests;
pub mod favorites;
pub mod payments;
pub mod promotions;
pub mod requests;
pub mod users;
