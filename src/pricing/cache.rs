use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::{BillingOptions, Plan};

use super::calculator::{quote, PriceQuote};
use super::cycle::BillingCycle;
use super::error::PricingError;

#[derive(Clone)]
struct CachedQuote {
    monthly_price: Option<f64>,
    billing_options: BillingOptions,
    quote: PriceQuote,
}

/// Memoized quotes keyed by `(plan name, cycle)`.
///
/// A cached quote is only reused while the plan's price and billing
/// options are unchanged; otherwise it is recomputed and replaced.
/// Errors are never cached.
#[derive(Clone, Default)]
pub struct QuoteCache {
    entries: Arc<Mutex<HashMap<(String, BillingCycle), CachedQuote>>>,
}

impl QuoteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quote(&self, plan: &Plan, cycle: BillingCycle) -> Result<PriceQuote, PricingError> {
        let key = (plan.name.clone(), cycle);
        if let Ok(entries) = self.entries.lock() {
            if let Some(hit) = entries.get(&key) {
                if hit.monthly_price == plan.monthly_price && hit.billing_options == plan.billing_options {
                    return Ok(hit.quote.clone());
                }
            }
        }

        let fresh = quote(plan, cycle)?;
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key,
                CachedQuote {
                    monthly_price: plan.monthly_price,
                    billing_options: plan.billing_options,
                    quote: fresh.clone(),
                },
            );
        }
        Ok(fresh)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillingOption, Location, PlanSpecs};

    fn plan(price: f64) -> Plan {
        Plan {
            id: None,
            name: "Gold USA".into(),
            monthly_price: Some(price),
            specs: PlanSpecs::default(),
            location: Location::Usa,
            billing_options: BillingOptions::default(),
            popular: true,
        }
    }

    #[test]
    fn test_reuses_entry_for_same_inputs() {
        let cache = QuoteCache::new();
        let a = cache.quote(&plan(30.0), BillingCycle::Annually).unwrap();
        let b = cache.quote(&plan(30.0), BillingCycle::Annually).unwrap();
        assert_eq!(a, b);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_price_change_invalidates_entry() {
        let cache = QuoteCache::new();
        let old = cache.quote(&plan(30.0), BillingCycle::Monthly).unwrap();
        let new = cache.quote(&plan(40.0), BillingCycle::Monthly).unwrap();
        assert_ne!(old.total_billed, new.total_billed);
        assert_eq!(new.original_total, Some(40.0));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_billing_option_change_invalidates_entry() {
        let cache = QuoteCache::new();
        let old = cache.quote(&plan(30.0), BillingCycle::Annually).unwrap();
        assert_eq!(old.discount_percentage, 20.0);

        let mut edited = plan(30.0);
        edited.billing_options.annual = BillingOption { enabled: true, discount_percentage: 50.0 };
        let new = cache.quote(&edited, BillingCycle::Annually).unwrap();
        assert_eq!(new.discount_percentage, 50.0);
        assert_eq!(new.total_billed, Some(180.0));
        assert_eq!(cache.len(), 1);

        // the replaced entry is what later lookups see
        assert_eq!(cache.quote(&edited, BillingCycle::Annually).unwrap(), new);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = QuoteCache::new();
        assert!(cache.quote(&plan(-3.0), BillingCycle::Monthly).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = QuoteCache::new();
        for cycle in BillingCycle::ALL {
            cache.quote(&plan(12.0), cycle).unwrap();
        }
        assert_eq!(cache.len(), 4);
        cache.clear();
        assert!(cache.is_empty());
    }
}
