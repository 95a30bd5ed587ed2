pub mod device;
pub mod poll_status;
pub mod reading;
pub mod runtime;

pub use device::*;
pub use poll_status::*;
pub use reading::*;
pub use runtime::*;
