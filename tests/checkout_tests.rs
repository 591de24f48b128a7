/// Tests for checkout link resolution
use hostfront::models::{Location, Plan};
use hostfront::pricing::{BillingCycle, PurchaseLinks, DEFAULT_CONFIGURATOR_URL, NO_LINK};

#[test]
fn test_table_entry_for_silver_usa_biannually() {
    let links = PurchaseLinks::default();
    let url = links.resolve("Silver USA", BillingCycle::Biannually, false);
    assert_eq!(
        url,
        "https://client.hostfront.cloud/index.php?rp=/store/standard-usa-rdp-vps/silver-usa&billingcycle=biennially"
    );
    let entry = PurchaseLinks::lookup("Silver USA").expect("Silver USA is in the link table");
    assert_eq!(url, entry.biennially);
}

#[test]
fn test_table_is_used_even_with_custom_base() {
    let links = PurchaseLinks::new("https://other.example.test/store", DEFAULT_CONFIGURATOR_URL);
    assert!(links
        .resolve("Silver USA", BillingCycle::Monthly, false)
        .starts_with("https://client.hostfront.cloud/"));
}

#[test]
fn test_fallback_for_unknown_eu_plan() {
    let url = PurchaseLinks::default().resolve("Unknown Plan EU", BillingCycle::Monthly, false);
    assert!(url.contains("/eu/"), "{url}");
    assert!(url.contains("unknown-plan-eu"), "{url}");
    assert!(url.ends_with("billingcycle=monthly"), "{url}");
}

#[test]
fn test_fallback_for_unknown_usa_plan() {
    let url = PurchaseLinks::default().resolve("Turbo USA", BillingCycle::Quarterly, false);
    assert!(url.contains("/standard-usa-rdp-vps/turbo-usa"), "{url}");
    assert!(url.ends_with("billingcycle=quarterly"), "{url}");
}

#[test]
fn test_fallback_is_deterministic() {
    let links = PurchaseLinks::default();
    for cycle in BillingCycle::ALL {
        assert_eq!(
            links.resolve("Mega Plan EU", cycle, false),
            links.resolve("Mega Plan EU", cycle, false)
        );
    }
}

#[test]
fn test_unrecognised_location_is_a_noop_anchor() {
    assert_eq!(PurchaseLinks::default().resolve("Starter", BillingCycle::Annually, false), NO_LINK);
}

#[test]
fn test_custom_plans_go_to_configurator() {
    let links = PurchaseLinks::default();
    for cycle in BillingCycle::ALL {
        assert_eq!(links.resolve("Anything", cycle, true), DEFAULT_CONFIGURATOR_URL);
    }

    let custom = Plan {
        id: None,
        name: "Custom EU".into(),
        monthly_price: None,
        specs: Default::default(),
        location: Location::Eu,
        billing_options: Default::default(),
        popular: false,
    };
    assert_eq!(links.resolve_plan(&custom, BillingCycle::Monthly), DEFAULT_CONFIGURATOR_URL);
}
