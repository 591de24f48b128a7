/// Error types for the pricing module
use thiserror::Error;

/// Errors raised while pricing a plan.
///
/// A missing monthly price is not an error: custom plans produce a quote
/// whose amounts are all `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// The billing cycle text did not name a supported cycle
    #[error("Invalid billing cycle: {0:?}")]
    InvalidBillingCycle(String),

    /// The plan's monthly price is negative, NaN or infinite
    #[error("Invalid monthly price for plan {plan:?}: {price}")]
    InvalidPrice { plan: String, price: f64 },

    /// An enabled billing option carries a discount outside 0..=100
    #[error("Invalid {cycle} discount for plan {plan:?}: {discount}")]
    InvalidDiscount {
        plan: String,
        cycle: String,
        discount: f64,
    },
}
