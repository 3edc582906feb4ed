pub mod string;

pub use string::normalize_label;
