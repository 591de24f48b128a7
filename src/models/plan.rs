use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing::{BillingCycle, PricingError};

/// Where a plan's servers are hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "EU")]
    Eu,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown location: {0:?}")]
pub struct UnknownLocation(pub String);

impl Location {
    pub const ALL: [Location; 2] = [Location::Usa, Location::Eu];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Usa => "USA",
            Location::Eu => "EU",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = UnknownLocation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USA" | "US" => Ok(Location::Usa),
            "EU" => Ok(Location::Eu),
            _ => Err(UnknownLocation(s.to_string())),
        }
    }
}

/// Descriptive hardware figures; never used for pricing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanSpecs {
    #[serde(default)]
    pub cpu: String,
    #[serde(default)]
    pub ram: String,
    #[serde(default)]
    pub storage: String,
    #[serde(default)]
    pub bandwidth: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingOption {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub discount_percentage: f64,
}

/// Per-cycle discount configuration. Monthly billing has no entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingOptions {
    #[serde(default)]
    pub quarterly: BillingOption,
    #[serde(default)]
    pub annual: BillingOption,
    #[serde(default)]
    pub biannual: BillingOption,
}

impl BillingOptions {
    pub fn get(&self, cycle: BillingCycle) -> Option<&BillingOption> {
        match cycle {
            BillingCycle::Monthly => None,
            BillingCycle::Quarterly => Some(&self.quarterly),
            BillingCycle::Annually => Some(&self.annual),
            BillingCycle::Biannually => Some(&self.biannual),
        }
    }
}

/// One purchasable hosting configuration, as stored by the content API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// `None` for custom / contact-us plans
    #[serde(default)]
    pub monthly_price: Option<f64>,
    #[serde(default)]
    pub specs: PlanSpecs,
    pub location: Location,
    #[serde(default)]
    pub billing_options: BillingOptions,
    #[serde(default)]
    pub popular: bool,
}

impl Plan {
    pub fn is_custom(&self) -> bool {
        self.monthly_price.is_none()
    }

    /// Check the pricing invariants that matter for `cycle`: a finite
    /// non-negative price, and a discount within 0..=100 when the plan
    /// enables its own option for that cycle. Options of other cycles are
    /// not read when pricing `cycle` and are not checked.
    pub fn validate(&self, cycle: BillingCycle) -> Result<(), PricingError> {
        if let Some(price) = self.monthly_price {
            if !price.is_finite() || price < 0.0 {
                return Err(PricingError::InvalidPrice {
                    plan: self.name.clone(),
                    price,
                });
            }
        }
        if let Some(option) = self.billing_options.get(cycle) {
            let d = option.discount_percentage;
            if option.enabled && !(d.is_finite() && (0.0..=100.0).contains(&d)) {
                return Err(PricingError::InvalidDiscount {
                    plan: self.name.clone(),
                    cycle: cycle.to_string(),
                    discount: d,
                });
            }
        }
        Ok(())
    }
}
