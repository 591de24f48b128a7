/// Billing cycle definitions
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// How often a customer is charged for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    /// Charged every month
    Monthly,
    /// Charged every 3 months
    Quarterly,
    /// Charged every 12 months
    #[serde(alias = "annual", alias = "yearly")]
    Annually,
    /// Charged every 24 months
    #[serde(alias = "biannual", alias = "biennially")]
    Biannually,
}

impl BillingCycle {
    /// Every cycle in selector order.
    pub const ALL: [BillingCycle; 4] = [
        BillingCycle::Monthly,
        BillingCycle::Quarterly,
        BillingCycle::Annually,
        BillingCycle::Biannually,
    ];

    /// Number of months billed at once
    ///
    /// # Examples
    ///
    /// ```
    /// use hostfront::pricing::BillingCycle;
    ///
    /// assert_eq!(BillingCycle::Monthly.months(), 1);
    /// assert_eq!(BillingCycle::Quarterly.months(), 3);
    /// assert_eq!(BillingCycle::Annually.months(), 12);
    /// assert_eq!(BillingCycle::Biannually.months(), 24);
    /// ```
    pub fn months(&self) -> u32 {
        match self {
            BillingCycle::Monthly => 1,
            BillingCycle::Quarterly => 3,
            BillingCycle::Annually => 12,
            BillingCycle::Biannually => 24,
        }
    }

    /// Human readable billing period shown under a price
    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "per month",
            BillingCycle::Quarterly => "every 3 months",
            BillingCycle::Annually => "per year",
            BillingCycle::Biannually => "every 2 years",
        }
    }

    /// Canonical lower-case name, the same string serde produces
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Quarterly => "quarterly",
            BillingCycle::Annually => "annually",
            BillingCycle::Biannually => "biannually",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Quarterly => "Quarterly",
            BillingCycle::Annually => "Annually",
            BillingCycle::Biannually => "Biannually",
        }
    }

    /// Value of the `billingcycle` query parameter expected by the checkout.
    ///
    /// The checkout spells the 24 month cycle "biennially".
    ///
    /// ```
    /// use hostfront::pricing::BillingCycle;
    ///
    /// assert_eq!(BillingCycle::Biannually.checkout_param(), "biennially");
    /// assert_eq!(BillingCycle::Annually.checkout_param(), "annually");
    /// ```
    pub fn checkout_param(&self) -> &'static str {
        match self {
            BillingCycle::Biannually => "biennially",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingCycle {
    type Err = PricingError;

    /// Parse a cycle name. Unknown names are an error, never a default.
    ///
    /// ```
    /// use hostfront::pricing::{BillingCycle, PricingError};
    ///
    /// assert_eq!("Quarterly".parse::<BillingCycle>(), Ok(BillingCycle::Quarterly));
    /// assert_eq!(
    ///     "weekly".parse::<BillingCycle>(),
    ///     Err(PricingError::InvalidBillingCycle("weekly".to_string()))
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(BillingCycle::Monthly),
            "quarterly" => Ok(BillingCycle::Quarterly),
            "annually" | "annual" | "yearly" => Ok(BillingCycle::Annually),
            "biannually" | "biannual" | "biennially" => Ok(BillingCycle::Biannually),
            _ => Err(PricingError::InvalidBillingCycle(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("annual".parse::<BillingCycle>(), Ok(BillingCycle::Annually));
        assert_eq!(" YEARLY ".parse::<BillingCycle>(), Ok(BillingCycle::Annually));
        assert_eq!("biennially".parse::<BillingCycle>(), Ok(BillingCycle::Biannually));
        assert_eq!("biannual".parse::<BillingCycle>(), Ok(BillingCycle::Biannually));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for bad in ["weekly", "", "month", "3"] {
            assert_eq!(
                bad.parse::<BillingCycle>(),
                Err(PricingError::InvalidBillingCycle(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_display_matches_serde() {
        for cycle in BillingCycle::ALL {
            let json = serde_json::to_string(&cycle).unwrap();
            assert_eq!(json, format!("\"{}\"", cycle));
        }
    }

    #[test]
    fn test_deserialize_alias() {
        let c: BillingCycle = serde_json::from_str("\"biennially\"").unwrap();
        assert_eq!(c, BillingCycle::Biannually);
    }
}
