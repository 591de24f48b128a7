use serde::Serialize;

/// Display-ready pricing card; every amount is already rounded text.
#[derive(Debug, Clone, Serialize)]
pub struct PlanCard {
    pub name: String,
    pub location: String,
    pub cpu: String,
    pub ram: String,
    pub storage: String,
    pub bandwidth: String,
    pub popular: bool,
    pub price_available: bool,
    pub price_text: String,
    pub period_label: String,
    pub total_text: String,
    /// Undiscounted price per month, struck through next to `price_text`
    pub list_price_text: String,
    pub has_savings: bool,
    pub savings_text: String,
    pub purchase_url: String,
    pub purchase_label: String,
    pub has_purchase_link: bool,
}

/// Entry in a selector row (billing cycle or location)
#[derive(Debug, Clone, Serialize)]
pub struct SelectorOption {
    pub label: String,
    pub href: String,
    pub selected: bool,
}
