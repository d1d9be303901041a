pub mod trip_service;
pub mod user_service;

pub use trip_service::*;
pub use user_service::*;
