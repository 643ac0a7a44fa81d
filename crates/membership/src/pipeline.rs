//! The fixed-order pricing pipeline.
//!
//! Composition order is significant and never changes:
//! 1. group discount on the plan + features subtotal
//! 2. special-offer discount on the post-group amount
//! 3. premium surcharge on the post-special amount
//!
//! Each stage receives the running amount produced by the previous one and
//! records what it did in the [`Breakdown`].

use serde::{Deserialize, Serialize};

use gymfee_core::ValueObject;

use crate::premium::PremiumTier;
use crate::rules::PricingRules;

/// Outcome of one discount or surcharge step.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Amount taken off (discounts) or added (surcharges); never negative.
    pub amount: f64,
    /// Running cost after the adjustment.
    pub result: f64,
}

impl Adjustment {
    fn unchanged(cost: f64) -> Self {
        Self {
            amount: 0.0,
            result: cost,
        }
    }
}

/// Every intermediate and final amount of one cost calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub base_cost: f64,
    pub features_cost: f64,
    pub subtotal: f64,
    pub group_discount: f64,
    pub after_group_discount: f64,
    pub special_offer_discount: f64,
    pub after_special_discount: f64,
    pub premium_surcharge: f64,
    pub total_cost: f64,
}

impl ValueObject for Breakdown {}

impl Breakdown {
    /// A breakdown with the subtotal filled in and no adjustments applied yet.
    pub fn start(base_cost: f64, features_cost: f64) -> Self {
        let subtotal = base_cost + features_cost;
        Self {
            base_cost,
            features_cost,
            subtotal,
            group_discount: 0.0,
            after_group_discount: subtotal,
            special_offer_discount: 0.0,
            after_special_discount: subtotal,
            premium_surcharge: 0.0,
            total_cost: subtotal,
        }
    }
}

/// 10% (by default) off the subtotal for groups at or above the threshold.
pub fn group_discount(subtotal: f64, member_count: u32, rules: &PricingRules) -> Adjustment {
    if member_count < rules.group_discount_threshold {
        return Adjustment::unchanged(subtotal);
    }

    let amount = subtotal * rules.group_discount_rate;
    Adjustment {
        amount,
        result: subtotal - amount,
    }
}

/// Flat discount of the highest offer whose threshold `cost` strictly exceeds.
pub fn special_offer_discount(cost: f64, rules: &PricingRules) -> Adjustment {
    let amount = rules
        .offers_descending()
        .into_iter()
        .find(|offer| cost > offer.threshold)
        .map_or(0.0, |offer| offer.discount);

    Adjustment {
        amount,
        result: cost - amount,
    }
}

pub fn premium_surcharge(cost: f64, tier: PremiumTier, rules: &PricingRules) -> Adjustment {
    let rate = rules.surcharge_rate(tier);
    if rate == 0.0 {
        return Adjustment::unchanged(cost);
    }

    let amount = cost * rate;
    Adjustment {
        amount,
        result: cost + amount,
    }
}

/// Inputs a stage may consult besides the running amount.
#[derive(Debug, Clone, Copy)]
pub struct StageContext<'a> {
    pub member_count: u32,
    pub premium_tier: PremiumTier,
    pub rules: &'a PricingRules,
}

/// One step of the pipeline.
pub trait Stage {
    fn name(&self) -> &'static str;

    /// Apply the step to `running`, record it in `breakdown`, return the new running amount.
    fn apply(&self, running: f64, ctx: &StageContext<'_>, breakdown: &mut Breakdown) -> f64;
}

pub struct GroupDiscountStage;

impl Stage for GroupDiscountStage {
    fn name(&self) -> &'static str {
        "group_discount"
    }

    fn apply(&self, running: f64, ctx: &StageContext<'_>, breakdown: &mut Breakdown) -> f64 {
        let adj = group_discount(running, ctx.member_count, ctx.rules);
        breakdown.group_discount = adj.amount;
        breakdown.after_group_discount = adj.result;
        adj.result
    }
}

pub struct SpecialOfferStage;

impl Stage for SpecialOfferStage {
    fn name(&self) -> &'static str {
        "special_offer_discount"
    }

    fn apply(&self, running: f64, ctx: &StageContext<'_>, breakdown: &mut Breakdown) -> f64 {
        let adj = special_offer_discount(running, ctx.rules);
        breakdown.special_offer_discount = adj.amount;
        breakdown.after_special_discount = adj.result;
        adj.result
    }
}

pub struct PremiumSurchargeStage;

impl Stage for PremiumSurchargeStage {
    fn name(&self) -> &'static str {
        "premium_surcharge"
    }

    fn apply(&self, running: f64, ctx: &StageContext<'_>, breakdown: &mut Breakdown) -> f64 {
        let adj = premium_surcharge(running, ctx.premium_tier, ctx.rules);
        breakdown.premium_surcharge = adj.amount;
        breakdown.total_cost = adj.result;
        adj.result
    }
}

/// The stages in the order they must run.
pub const STAGES: [&dyn Stage; 3] = [&GroupDiscountStage, &SpecialOfferStage, &PremiumSurchargeStage];

/// Run every stage over the subtotal of `base_cost + features_cost`.
pub fn run(base_cost: f64, features_cost: f64, ctx: &StageContext<'_>) -> Breakdown {
    let mut breakdown = Breakdown::start(base_cost, features_cost);
    let mut running = breakdown.subtotal;

    for stage in STAGES {
        running = stage.apply(running, ctx, &mut breakdown);
        tracing::trace!(stage = stage.name(), running, "pricing stage applied");
    }

    breakdown.total_cost = running;
    breakdown
}
