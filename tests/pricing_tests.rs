/// Tests for plan pricing across billing cycles
use hostfront::models::{BillingOption, BillingOptions, Location, Plan, PlanSpecs};
use hostfront::pricing::{quote, quote_for, BillingCycle, PricingError, QuoteCache};

const EPSILON: f64 = 1e-9;

fn plan(name: &str, price: Option<f64>, options: BillingOptions) -> Plan {
    Plan {
        id: None,
        name: name.to_string(),
        monthly_price: price,
        specs: PlanSpecs {
            cpu: "2 vCPU".into(),
            ram: "4 GB".into(),
            storage: "80 GB NVMe".into(),
            bandwidth: "3 TB".into(),
        },
        location: Location::Usa,
        billing_options: options,
        popular: false,
    }
}

fn silver_usa() -> Plan {
    let options = BillingOptions {
        quarterly: BillingOption { enabled: false, discount_percentage: 0.0 },
        annual: BillingOption { enabled: true, discount_percentage: 20.0 },
        biannual: BillingOption::default(),
    };
    plan("Silver USA", Some(18.04), options)
}

fn sample_plans() -> Vec<Plan> {
    let mut plans = vec![silver_usa()];
    for (i, price) in [0.0, 4.99, 9.5, 18.04, 33.33, 119.0].into_iter().enumerate() {
        plans.push(plan(&format!("Defaults {}", i), Some(price), BillingOptions::default()));
        let options = BillingOptions {
            quarterly: BillingOption { enabled: true, discount_percentage: 0.0 },
            annual: BillingOption { enabled: true, discount_percentage: 16.0 },
            biannual: BillingOption { enabled: true, discount_percentage: 100.0 },
        };
        plans.push(plan(&format!("Configured {}", i), Some(price), options));
    }
    plans
}

#[test]
fn test_quarterly_falls_back_to_default_discount() {
    let q = quote(&silver_usa(), BillingCycle::Quarterly).unwrap();
    assert_eq!(q.discount_percentage, 10.0);
    assert_eq!(q.original_total, Some(54.12));
    assert_eq!(q.total_billed, Some(48.708));
    assert_eq!(q.monthly_equivalent, Some(16.236));
    assert!((q.savings.unwrap() - 5.412).abs() < EPSILON);
    assert_eq!(q.billing_period_label, "every 3 months");
}

#[test]
fn test_annual_uses_enabled_plan_discount() {
    let q = quote(&silver_usa(), BillingCycle::Annually).unwrap();
    assert_eq!(q.discount_percentage, 20.0);
    assert_eq!(q.original_total, Some(216.48));
    assert_eq!(q.total_billed, Some(173.184));
    assert_eq!(q.monthly_equivalent, Some(14.432));
    assert_eq!(q.billing_period_label, "per year");
}

#[test]
fn test_biannual_default_discount() {
    let q = quote(&silver_usa(), BillingCycle::Biannually).unwrap();
    assert_eq!(q.discount_percentage, 30.0);
    assert_eq!(q.original_total, Some(18.04 * 24.0));
    assert_eq!(q.billing_period_label, "every 2 years");
}

#[test]
fn test_monthly_is_five_percent_off_list() {
    for p in sample_plans() {
        let q = quote(&p, BillingCycle::Monthly).unwrap();
        let price = p.monthly_price.unwrap();
        assert_eq!(q.monthly_equivalent, Some(price * 0.95), "{}", p.name);
        assert_eq!(q.original_total, Some(price));
        assert_eq!(q.billing_period_label, "per month");
    }
}

#[test]
fn test_discount_never_increases_price() {
    for p in sample_plans() {
        for cycle in BillingCycle::ALL {
            let q = quote(&p, cycle).unwrap();
            let total = q.total_billed.unwrap();
            let original = q.original_total.unwrap();
            assert!(total <= original, "{} {}", p.name, cycle);
            if q.discount_percentage == 0.0 {
                assert_eq!(total, original);
            } else if original > 0.0 {
                assert!(total < original, "{} {}", p.name, cycle);
            }
        }
    }
}

#[test]
fn test_savings_plus_total_equals_original() {
    for p in sample_plans() {
        for cycle in BillingCycle::ALL {
            let q = quote(&p, cycle).unwrap();
            let sum = q.savings.unwrap() + q.total_billed.unwrap();
            assert!((sum - q.original_total.unwrap()).abs() < EPSILON, "{} {}", p.name, cycle);
        }
    }
}

#[test]
fn test_monthly_equivalent_times_months_is_total() {
    for p in sample_plans() {
        for cycle in BillingCycle::ALL {
            let q = quote(&p, cycle).unwrap();
            let rebuilt = q.monthly_equivalent.unwrap() * f64::from(cycle.months());
            assert!((rebuilt - q.total_billed.unwrap()).abs() < EPSILON);
        }
    }
}

#[test]
fn test_quote_is_idempotent() {
    for p in sample_plans() {
        for cycle in BillingCycle::ALL {
            let a = quote(&p, cycle).unwrap();
            let b = quote(&p, cycle).unwrap();
            assert_eq!(a, b);
            assert_eq!(
                a.total_billed.map(f64::to_bits),
                b.total_billed.map(f64::to_bits)
            );
        }
    }
}

#[test]
fn test_cached_quote_matches_direct_quote() {
    let cache = QuoteCache::new();
    for p in sample_plans() {
        for cycle in BillingCycle::ALL {
            assert_eq!(cache.quote(&p, cycle).unwrap(), quote(&p, cycle).unwrap());
        }
    }
}

#[test]
fn test_custom_plan_quote_is_empty() {
    let custom = plan("Build Your Own", None, BillingOptions::default());
    for cycle in BillingCycle::ALL {
        let q = quote(&custom, cycle).unwrap();
        assert_eq!(q.monthly_equivalent, None);
        assert_eq!(q.total_billed, None);
        assert_eq!(q.original_total, None);
        assert_eq!(q.savings, None);
    }
}

#[test]
fn test_unknown_cycle_is_an_error() {
    assert_eq!(
        quote_for(&silver_usa(), "weekly"),
        Err(PricingError::InvalidBillingCycle("weekly".to_string()))
    );
}

#[test]
fn test_quote_for_accepts_store_spelling() {
    let q = quote_for(&silver_usa(), "biennially").unwrap();
    assert_eq!(q.cycle, BillingCycle::Biannually);
}
