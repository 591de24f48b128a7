//! Plan pricing for the storefront
//!
//! This module turns a plan's monthly list price into the figures shown on
//! pricing cards and the link a customer follows to buy it:
//! - [`BillingCycle`] parsing and period metadata
//! - [`quote`]: discount resolution and cycle totals as a [`PriceQuote`]
//! - [`PurchaseLinks`]: checkout URL lookup with a deterministic fallback
//! - [`QuoteCache`]: memoized quotes per plan and cycle
//!
//! Everything here is pure; plans are read, never modified.
//!
//! # Examples
//!
//! ```
//! use hostfront::models::{BillingOption, Location, Plan};
//! use hostfront::pricing::{quote, BillingCycle, PurchaseLinks};
//!
//! let mut plan = Plan {
//!     id: None,
//!     name: "Silver USA".to_string(),
//!     monthly_price: Some(18.04),
//!     specs: Default::default(),
//!     location: Location::Usa,
//!     billing_options: Default::default(),
//!     popular: true,
//! };
//! plan.billing_options.annual = BillingOption { enabled: true, discount_percentage: 20.0 };
//!
//! let q = quote(&plan, BillingCycle::Annually).unwrap();
//! assert_eq!(q.total_billed, Some(173.184));
//!
//! let url = PurchaseLinks::default().resolve_plan(&plan, BillingCycle::Annually);
//! assert!(url.ends_with("silver-usa&billingcycle=annually"));
//! ```

mod cache;
mod calculator;
mod checkout;
mod cycle;
mod error;

pub use cache::QuoteCache;
pub use calculator::{
    default_discount, quote, quote_for, resolve_discount, PriceQuote, MONTHLY_DISCOUNT_PERCENT,
};
pub use checkout::{CycleLinks, PurchaseLinks, DEFAULT_CONFIGURATOR_URL, DEFAULT_STORE_BASE_URL, NO_LINK};
pub use cycle::BillingCycle;
pub use error::PricingError;
