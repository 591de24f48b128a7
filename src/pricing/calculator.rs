use serde::Serialize;

use crate::models::Plan;

use super::cycle::BillingCycle;
use super::error::PricingError;

/// Discount applied to monthly billing on every plan.
pub const MONTHLY_DISCOUNT_PERCENT: f64 = 5.0;

/// Platform-wide discount for a cycle, used when the plan does not enable
/// its own option for that cycle. This table is the single source of the
/// default discounts.
pub fn default_discount(cycle: BillingCycle) -> f64 {
    match cycle {
        BillingCycle::Monthly => MONTHLY_DISCOUNT_PERCENT,
        BillingCycle::Quarterly => 10.0,
        BillingCycle::Annually => 20.0,
        BillingCycle::Biannually => 30.0,
    }
}

/// Discount percentage that applies to `plan` billed every `cycle`.
///
/// Monthly billing always gets [`MONTHLY_DISCOUNT_PERCENT`]. Longer cycles
/// use the plan's own option when it is enabled and the default otherwise.
pub fn resolve_discount(plan: &Plan, cycle: BillingCycle) -> f64 {
    match plan.billing_options.get(cycle) {
        Some(option) if option.enabled => option.discount_percentage,
        _ => default_discount(cycle),
    }
}

/// Result of pricing one plan for one billing cycle.
///
/// Amounts are unrounded; round only when displaying them. All amounts are
/// `None` for a plan without a list price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub cycle: BillingCycle,
    pub monthly_equivalent: Option<f64>,
    pub total_billed: Option<f64>,
    pub original_total: Option<f64>,
    pub savings: Option<f64>,
    pub billing_period_label: &'static str,
    pub discount_percentage: f64,
}

/// Price `plan` for `cycle`.
///
/// # Examples
///
/// ```
/// use hostfront::models::{Location, Plan};
/// use hostfront::pricing::{quote, BillingCycle};
///
/// let plan = Plan {
///     id: None,
///     name: "Silver USA".to_string(),
///     monthly_price: Some(18.04),
///     specs: Default::default(),
///     location: Location::Usa,
///     billing_options: Default::default(),
///     popular: false,
/// };
///
/// let q = quote(&plan, BillingCycle::Quarterly).unwrap();
/// assert_eq!(q.discount_percentage, 10.0);
/// assert_eq!(q.original_total, Some(54.12));
/// assert_eq!(q.total_billed, Some(48.708));
/// assert_eq!(q.monthly_equivalent, Some(16.236));
/// assert_eq!(q.billing_period_label, "every 3 months");
/// ```
pub fn quote(plan: &Plan, cycle: BillingCycle) -> Result<PriceQuote, PricingError> {
    plan.validate(cycle)?;

    let discount = resolve_discount(plan, cycle);
    let mut q = PriceQuote {
        cycle,
        monthly_equivalent: None,
        total_billed: None,
        original_total: None,
        savings: None,
        billing_period_label: cycle.label(),
        discount_percentage: discount,
    };

    let Some(monthly_price) = plan.monthly_price else {
        return Ok(q);
    };

    let months = f64::from(cycle.months());
    let original_total = match cycle {
        BillingCycle::Monthly => monthly_price,
        _ => monthly_price * months,
    };
    let total_billed = original_total * (1.0 - discount / 100.0);
    let monthly_equivalent = match cycle {
        BillingCycle::Monthly => total_billed,
        _ => total_billed / months,
    };

    q.original_total = Some(original_total);
    q.total_billed = Some(total_billed);
    q.monthly_equivalent = Some(monthly_equivalent);
    q.savings = Some(original_total - total_billed);
    Ok(q)
}

/// Parse `cycle` and price `plan` for it.
///
/// An unknown cycle name is [`PricingError::InvalidBillingCycle`].
pub fn quote_for(plan: &Plan, cycle: &str) -> Result<PriceQuote, PricingError> {
    let cycle: BillingCycle = cycle.parse()?;
    quote(plan, cycle)
}
