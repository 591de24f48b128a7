/// Purchase link resolution for the external checkout
use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::Plan;
use crate::utils::slugify;

use super::cycle::BillingCycle;

pub const DEFAULT_STORE_BASE_URL: &str = "https://client.hostfront.cloud/index.php?rp=/store";
pub const DEFAULT_CONFIGURATOR_URL: &str =
    "https://client.hostfront.cloud/index.php?rp=/store/build-your-own-vps";

/// Returned when no checkout page can be inferred for a plan.
pub const NO_LINK: &str = "#";

const USA_SEGMENT: &str = "standard-usa-rdp-vps";
const EU_SEGMENT: &str = "eu";

/// Checkout URLs for one plan, one per billing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleLinks {
    pub monthly: &'static str,
    pub quarterly: &'static str,
    pub annually: &'static str,
    pub biennially: &'static str,
}

impl CycleLinks {
    pub fn get(&self, cycle: BillingCycle) -> &'static str {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Quarterly => self.quarterly,
            BillingCycle::Annually => self.annually,
            BillingCycle::Biannually => self.biennially,
        }
    }
}

// Expands a store product path into its four literal checkout URLs.
macro_rules! store_links {
    ($path:literal) => {
        CycleLinks {
            monthly: concat!("https://client.hostfront.cloud/index.php?rp=/store/", $path, "&billingcycle=monthly"),
            quarterly: concat!("https://client.hostfront.cloud/index.php?rp=/store/", $path, "&billingcycle=quarterly"),
            annually: concat!("https://client.hostfront.cloud/index.php?rp=/store/", $path, "&billingcycle=annually"),
            biennially: concat!("https://client.hostfront.cloud/index.php?rp=/store/", $path, "&billingcycle=biennially"),
        }
    };
}

/// Plans with a known checkout product, keyed by display name.
static PURCHASE_TABLE: Lazy<HashMap<&'static str, CycleLinks>> = Lazy::new(|| {
    HashMap::from([
        ("Bronze USA", store_links!("standard-usa-rdp-vps/bronze-usa")),
        ("Silver USA", store_links!("standard-usa-rdp-vps/silver-usa")),
        ("Gold USA", store_links!("standard-usa-rdp-vps/gold-usa")),
        ("Platinum USA", store_links!("standard-usa-rdp-vps/platinum-usa")),
        ("Bronze EU", store_links!("eu/bronze-eu")),
        ("Silver EU", store_links!("eu/silver-eu")),
        ("Gold EU", store_links!("eu/gold-eu-vps")),
        ("Platinum EU", store_links!("eu/platinum-eu-vps")),
    ])
});

/// Maps plans to checkout URLs.
///
/// Known plans come from a fixed table. Other plans get a URL built from
/// their name under the store base, which must stay deterministic since
/// rendered pages are cached.
#[derive(Debug, Clone)]
pub struct PurchaseLinks {
    store_base_url: String,
    configurator_url: String,
}

impl Default for PurchaseLinks {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_BASE_URL, DEFAULT_CONFIGURATOR_URL)
    }
}

impl PurchaseLinks {
    pub fn new(store_base_url: &str, configurator_url: &str) -> Self {
        Self {
            store_base_url: store_base_url.trim().trim_end_matches('/').to_string(),
            configurator_url: configurator_url.trim().to_string(),
        }
    }

    /// Table entry for a plan name, if it has one
    pub fn lookup(plan_name: &str) -> Option<&'static CycleLinks> {
        PURCHASE_TABLE.get(plan_name)
    }

    /// Checkout URL for a plan and cycle. Never fails; returns `"#"` when
    /// the plan's location cannot be told from its name.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostfront::pricing::{BillingCycle, PurchaseLinks};
    ///
    /// let links = PurchaseLinks::default();
    /// let url = links.resolve("Unknown Plan EU", BillingCycle::Monthly, false);
    /// assert_eq!(
    ///     url,
    ///     "https://client.hostfront.cloud/index.php?rp=/store/eu/unknown-plan-eu&billingcycle=monthly"
    /// );
    /// assert_eq!(links.resolve("Mystery", BillingCycle::Monthly, false), "#");
    /// ```
    pub fn resolve(&self, plan_name: &str, cycle: BillingCycle, is_custom: bool) -> String {
        if is_custom {
            return self.configurator_url.clone();
        }
        if let Some(links) = Self::lookup(plan_name) {
            return links.get(cycle).to_string();
        }
        self.synthesize(plan_name, cycle)
    }

    pub fn resolve_plan(&self, plan: &Plan, cycle: BillingCycle) -> String {
        self.resolve(&plan.name, cycle, plan.is_custom())
    }

    fn synthesize(&self, plan_name: &str, cycle: BillingCycle) -> String {
        let segment = if plan_name.contains("USA") {
            USA_SEGMENT
        } else if plan_name.contains("EU") {
            EU_SEGMENT
        } else {
            tracing::debug!(plan = plan_name, "No location marker in plan name; no purchase link");
            return NO_LINK.to_string();
        };
        let separator = if self.store_base_url.contains('?') { '&' } else { '?' };
        let url = format!(
            "{}/{}/{}{}billingcycle={}",
            self.store_base_url,
            segment,
            slugify(plan_name),
            separator,
            cycle.checkout_param()
        );
        tracing::debug!(plan = plan_name, %url, "Synthesized purchase link");
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entries_share_default_base() {
        for links in PURCHASE_TABLE.values() {
            for cycle in BillingCycle::ALL {
                let url = links.get(cycle);
                assert!(url.starts_with(DEFAULT_STORE_BASE_URL), "{url}");
                assert!(url.ends_with(&format!("billingcycle={}", cycle.checkout_param())), "{url}");
            }
        }
    }

    #[test]
    fn test_table_wins_over_fallback() {
        let links = PurchaseLinks::default();
        assert_eq!(
            links.resolve("Gold EU", BillingCycle::Annually, false),
            "https://client.hostfront.cloud/index.php?rp=/store/eu/gold-eu-vps&billingcycle=annually"
        );
    }

    #[test]
    fn test_custom_plan_uses_configurator() {
        let links = PurchaseLinks::default();
        assert_eq!(
            links.resolve("Silver USA", BillingCycle::Quarterly, true),
            DEFAULT_CONFIGURATOR_URL
        );
    }

    #[test]
    fn test_fallback_usa_segment_and_slug() {
        let links = PurchaseLinks::default();
        assert_eq!(
            links.resolve("Titanium  USA (NVMe)", BillingCycle::Biannually, false),
            "https://client.hostfront.cloud/index.php?rp=/store/standard-usa-rdp-vps/titanium-usa-nvme&billingcycle=biennially"
        );
    }

    #[test]
    fn test_fallback_base_without_query() {
        let links = PurchaseLinks::new("https://shop.example.test/store/", "https://shop.example.test/byo");
        assert_eq!(
            links.resolve("Mini EU", BillingCycle::Quarterly, false),
            "https://shop.example.test/store/eu/mini-eu?billingcycle=quarterly"
        );
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let links = PurchaseLinks::default();
        assert_eq!(links.resolve("Deluxe", BillingCycle::Monthly, false), NO_LINK);
        assert_eq!(links.resolve("", BillingCycle::Monthly, false), NO_LINK);
    }
}
