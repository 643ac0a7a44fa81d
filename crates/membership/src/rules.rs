use std::collections::BTreeMap;

use crate::premium::PremiumTier;

/// Flat discount granted when the running cost strictly exceeds `threshold`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpecialOffer {
    pub threshold: f64,
    pub discount: f64,
}

/// Discount and surcharge constants applied by the pricing pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRules {
    /// Minimum member count that earns the group discount.
    pub group_discount_threshold: u32,
    /// Fraction of the subtotal taken off for groups.
    pub group_discount_rate: f64,
    /// Threshold table; at most one entry applies (the highest exceeded).
    pub special_offers: Vec<SpecialOffer>,
    /// Surcharge rate per premium tier. Tiers missing from the table pay nothing.
    pub premium_surcharge_rates: BTreeMap<PremiumTier, f64>,
    pub min_members: u32,
    pub max_members: u32,
}

impl PricingRules {
    pub fn surcharge_rate(&self, tier: PremiumTier) -> f64 {
        self.premium_surcharge_rates.get(&tier).copied().unwrap_or(0.0)
    }

    /// Special offers ordered from the highest threshold down.
    pub fn offers_descending(&self) -> Vec<SpecialOffer> {
        let mut offers = self.special_offers.clone();
        offers.sort_by(|a, b| b.threshold.total_cmp(&a.threshold));
        offers
    }
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            group_discount_threshold: 2,
            group_discount_rate: 0.10,
            special_offers: vec![
                SpecialOffer {
                    threshold: 200.0,
                    discount: 20.0,
                },
                SpecialOffer {
                    threshold: 400.0,
                    discount: 50.0,
                },
            ],
            premium_surcharge_rates: BTreeMap::from([
                (PremiumTier::ExclusiveFacilities, 0.15),
                (PremiumTier::SpecializedTraining, 0.15),
            ]),
            min_members: 1,
            max_members: 10,
        }
    }
}

/// Render a rate as a whole percentage, e.g. `0.15` -> `15%`.
pub(crate) fn percent(rate: f64) -> String {
    format!("{}%", (rate * 100.0).round() as i64)
}
