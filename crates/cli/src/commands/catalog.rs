use std::io::Write;

use gymfee_membership::{PremiumTier, PricingEngine};

/// List what can currently be selected.
pub fn run(engine: &PricingEngine, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Available Membership Plans:")?;
    for (i, plan) in engine.available_plans().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, plan)?;
    }

    writeln!(out, "\nAvailable Additional Features:")?;
    for (i, feature) in engine.available_features().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, feature)?;
    }

    writeln!(out, "\nPremium Feature Levels:")?;
    for tier in PremiumTier::ALL {
        let rate = engine.rules().surcharge_rate(tier);
        if rate > 0.0 {
            writeln!(out, "- {tier} (+{:.0}% surcharge)", rate * 100.0)?;
        } else {
            writeln!(out, "- {tier}")?;
        }
    }

    Ok(())
}
