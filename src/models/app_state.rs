use crate::pricing::{PurchaseLinks, QuoteCache};

#[derive(Clone)]
pub struct AppState {
    pub api_base_url: String,
    pub api_token: String,
    pub public_base_url: String,
    pub client: reqwest::Client,
    pub purchase_links: PurchaseLinks,
    /// Shared across requests; entries are checked against the plan on every hit.
    pub quotes: QuoteCache,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn new(client: reqwest::Client, api_base_url: String, api_token: String) -> Self {
        Self {
            api_base_url,
            api_token,
            public_base_url: String::new(),
            client,
            purchase_links: PurchaseLinks::default(),
            quotes: QuoteCache::new(),
            custom_css: None,
        }
    }
}
