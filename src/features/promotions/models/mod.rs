mod promotion;

pub use promotion::Promotion;
