mod contest;

pub use contest::Contest;
