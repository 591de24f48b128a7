// Thin REST layer over the content API
pub mod client;
pub mod error;
pub mod plans;

pub use client::{api_call, set_silent};
pub use error::ApiError;
pub use plans::{load_plans, load_plans_from_file, parse_plans};
