pub mod promotion_handler;

pub use promotion_handler::{__path_list_promotions, list_promotions};
