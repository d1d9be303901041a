pub mod context;
pub mod resolver;
pub mod token;

pub use context::*;
pub use resolver::*;
pub use token::*;
