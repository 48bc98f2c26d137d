pub mod booking_handler;

pub use booking_handler::{
    __path_create_booking, __path_list_bookings, __path_list_participated, __path_mark_winner,
    create_booking, list_bookings, list_participated, mark_winner,
};
