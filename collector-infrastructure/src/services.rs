pub mod govee_service;
pub mod health_service;
pub mod poll_service;

pub use govee_service::*;
pub use health_service::*;
pub use poll_service::*;
