pub mod assignment;
pub mod friendship;
pub mod trip;
pub mod user;

pub use assignment::*;
pub use friendship::*;
pub use trip::*;
pub use user::*;
