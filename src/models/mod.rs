pub mod app_state;
pub mod plan;
pub mod plan_card;

pub use app_state::AppState;
pub use plan::{BillingOption, BillingOptions, Location, Plan, PlanSpecs, UnknownLocation};
pub use plan_card::{PlanCard, SelectorOption};
