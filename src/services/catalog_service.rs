use std::cmp::Ordering;

use crate::models::{Location, Plan, PlanCard, SelectorOption};
use crate::pricing::{BillingCycle, PriceQuote, PurchaseLinks, QuoteCache, NO_LINK};
use crate::utils::{build_query_string, format_money, format_percent};

pub const CUSTOM_PRICING_TEXT: &str = "Custom Pricing";
pub const PRICE_UNAVAILABLE_TEXT: &str = "Price unavailable";

/// Cheapest first; plans without a list price go last.
pub fn sort_plans(plans: &mut [Plan]) {
    plans.sort_by(|a, b| match (a.monthly_price, b.monthly_price) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal).then_with(|| a.name.cmp(&b.name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    });
}

/// Cards for every plan. `cycle` is `None` when the requested cycle could
/// not be parsed; the cards then show a fallback instead of a price.
pub fn build_plan_cards(
    plans: &[Plan],
    cycle: Option<BillingCycle>,
    quotes: &QuoteCache,
    links: &PurchaseLinks,
) -> Vec<PlanCard> {
    plans
        .iter()
        .map(|plan| match cycle {
            Some(c) => plan_card(plan, c, quotes, links),
            None => unavailable_card(plan),
        })
        .collect()
}

pub fn plan_card(plan: &Plan, cycle: BillingCycle, quotes: &QuoteCache, links: &PurchaseLinks) -> PlanCard {
    match quotes.quote(plan, cycle) {
        Ok(q) => card_from_quote(plan, &q, links.resolve_plan(plan, cycle)),
        Err(e) => {
            tracing::warn!(%e, plan = %plan.name, %cycle, "Could not price plan");
            unavailable_card(plan)
        }
    }
}

fn base_card(plan: &Plan) -> PlanCard {
    PlanCard {
        name: plan.name.clone(),
        location: plan.location.to_string(),
        cpu: plan.specs.cpu.clone(),
        ram: plan.specs.ram.clone(),
        storage: plan.specs.storage.clone(),
        bandwidth: plan.specs.bandwidth.clone(),
        popular: plan.popular,
        price_available: false,
        price_text: String::new(),
        period_label: String::new(),
        total_text: String::new(),
        list_price_text: String::new(),
        has_savings: false,
        savings_text: String::new(),
        purchase_url: NO_LINK.to_string(),
        purchase_label: String::new(),
        has_purchase_link: false,
    }
}

fn card_from_quote(plan: &Plan, q: &PriceQuote, purchase_url: String) -> PlanCard {
    let mut card = base_card(plan);
    card.has_purchase_link = purchase_url != NO_LINK;
    card.purchase_url = purchase_url;

    let (Some(monthly), Some(total), Some(original), Some(savings)) =
        (q.monthly_equivalent, q.total_billed, q.original_total, q.savings)
    else {
        card.price_text = CUSTOM_PRICING_TEXT.to_string();
        card.purchase_label = "Build your own".to_string();
        return card;
    };

    card.price_available = true;
    card.price_text = format_money(monthly);
    card.period_label = "/month".to_string();
    card.total_text = format!("{} billed {}", format_money(total), q.billing_period_label);
    card.purchase_label = "Order now".to_string();
    if savings > 0.0 {
        card.has_savings = true;
        card.list_price_text = format_money(original / f64::from(q.cycle.months()));
        card.savings_text = format!("Save {} ({})", format_money(savings), format_percent(q.discount_percentage));
    }
    card
}

fn unavailable_card(plan: &Plan) -> PlanCard {
    let mut card = base_card(plan);
    card.price_text = PRICE_UNAVAILABLE_TEXT.to_string();
    card
}

fn pricing_href(location: &str, cycle: &str) -> String {
    format!("/pricing?{}", build_query_string(&[("location", location), ("cycle", cycle)]))
}

pub fn cycle_options(location: Location, selected: Option<BillingCycle>) -> Vec<SelectorOption> {
    BillingCycle::ALL
        .iter()
        .map(|c| SelectorOption {
            label: c.display_name().to_string(),
            href: pricing_href(location.as_str(), c.as_str()),
            selected: selected == Some(*c),
        })
        .collect()
}

pub fn location_options(selected: Option<Location>, cycle: &str) -> Vec<SelectorOption> {
    Location::ALL
        .iter()
        .map(|l| SelectorOption {
            label: l.as_str().to_string(),
            href: pricing_href(l.as_str(), cycle),
            selected: selected == Some(*l),
        })
        .collect()
}
