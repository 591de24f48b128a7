use askama::Template;

use crate::models::{PlanCard, SelectorOption};

#[derive(Template)]
#[template(path = "pricing.html")]
pub struct PricingPageTemplate<'a> {
    pub home_url: String,
    pub stylesheet_url: String,
    pub notices: Vec<String>,
    pub has_notices: bool,
    pub location_label: String,
    pub locations: &'a [SelectorOption],
    pub cycles: &'a [SelectorOption],
    pub cards: &'a [PlanCard],
    pub has_cards: bool,
}
