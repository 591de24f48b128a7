pub mod error;
pub mod helpers;
pub mod pricing;
pub mod quotes;
pub mod system;

pub use error::HandlerError;
