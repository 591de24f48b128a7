pub mod catalog_service;

// Re-export commonly used functions
pub use catalog_service::{build_plan_cards, cycle_options, location_options, plan_card, sort_plans};
