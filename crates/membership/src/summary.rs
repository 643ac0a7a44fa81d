//! Text rendering of a computed breakdown.
//!
//! Rendering never does arithmetic of its own; every amount comes from the
//! [`Breakdown`] the engine produced for the same selection.

use crate::pipeline::Breakdown;
use crate::premium::PremiumTier;
use crate::rules::{PricingRules, percent};

const WIDTH: usize = 60;
const LABEL_WIDTH: usize = 28;

/// Everything the report shows besides the amounts.
pub struct SummaryInput<'a> {
    pub plan: &'a str,
    /// Feature names with their unit prices, in selection order.
    pub features: &'a [(&'a str, f64)],
    pub member_count: u32,
    pub premium_tier: PremiumTier,
    pub rules: &'a PricingRules,
}

pub fn render(input: &SummaryInput<'_>, breakdown: &Breakdown) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push(format!("\n{}", "=".repeat(WIDTH)));
    out.push(format!("{:^WIDTH$}", "MEMBERSHIP SUMMARY"));
    out.push("=".repeat(WIDTH));

    out.push(format!("\nMembership Plan: {}", input.plan));
    out.push(format!("Number of Members: {}", input.member_count));

    if input.features.is_empty() {
        out.push("Additional Features: None".to_string());
    } else {
        out.push("Additional Features:".to_string());
        for (name, cost) in input.features {
            out.push(format!("  - {name}: ${cost:.2}"));
        }
    }

    if input.premium_tier.is_premium() {
        out.push(format!("Premium Level: {}", input.premium_tier.label()));
    }

    out.push(format!("\n{}", "-".repeat(WIDTH)));
    out.push(format!("{:^WIDTH$}", "COST BREAKDOWN"));
    out.push("-".repeat(WIDTH));

    out.push(amount_line("Base Membership Cost:", ' ', breakdown.base_cost));
    if breakdown.features_cost > 0.0 {
        out.push(amount_line("Additional Features Cost:", ' ', breakdown.features_cost));
        out.push(amount_line("Subtotal:", ' ', breakdown.subtotal));
    }

    if breakdown.group_discount > 0.0 {
        let label = format!("Group Discount ({}):", percent(input.rules.group_discount_rate));
        out.push(amount_line(&label, '-', breakdown.group_discount));
        out.push(amount_line("After Group Discount:", ' ', breakdown.after_group_discount));
    }

    if breakdown.special_offer_discount > 0.0 {
        out.push(amount_line("Special Offer Discount:", '-', breakdown.special_offer_discount));
        out.push(amount_line("After Special Discount:", ' ', breakdown.after_special_discount));
    }

    if breakdown.premium_surcharge > 0.0 {
        let rate = input.rules.surcharge_rate(input.premium_tier);
        let label = format!("Premium Surcharge ({}):", percent(rate));
        out.push(amount_line(&label, ' ', breakdown.premium_surcharge));
    }

    out.push("-".repeat(WIDTH));
    out.push(amount_line("TOTAL COST:", ' ', breakdown.total_cost));
    out.push(format!("{}\n", "=".repeat(WIDTH)));

    out.join("\n")
}

fn amount_line(label: &str, sign: char, amount: f64) -> String {
    format!("{label:<LABEL_WIDTH$}{sign}${amount:>10.2}")
}
