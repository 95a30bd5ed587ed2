pub mod reading_sanity;

pub use reading_sanity::*;
