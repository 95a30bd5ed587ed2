// Domain value objects
pub mod identifiers;
pub mod units;

pub use identifiers::*;
pub use units::*;
