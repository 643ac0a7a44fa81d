use std::io::Write;

use gymfee_membership::{PremiumTier, PricingEngine};

const RULE_WIDTH: usize = 70;

const ALL_FEATURES: &[&str] = &["Personal Training", "Group Classes", "Nutritional Consulting"];

struct Scenario {
    title: &'static str,
    plan: &'static str,
    features: &'static [&'static str],
    member_count: u32,
    premium_tier: PremiumTier,
    show_whole_dollars: bool,
}

const fn scenario(
    title: &'static str,
    plan: &'static str,
    features: &'static [&'static str],
    member_count: u32,
    premium_tier: PremiumTier,
) -> Scenario {
    Scenario {
        title,
        plan,
        features,
        member_count,
        premium_tier,
        show_whole_dollars: false,
    }
}

const SECTIONS: &[(&str, &[Scenario])] = &[
    (
        "BASIC SCENARIOS",
        &[
            scenario("Single Member - Basic Plan", "Basic", &[], 1, PremiumTier::None),
            scenario("Single Member - Premium Plan", "Premium", &[], 1, PremiumTier::None),
            scenario("Single Member - Family Plan", "Family", &[], 1, PremiumTier::None),
        ],
    ),
    (
        "SCENARIOS WITH ADDITIONAL FEATURES",
        &[
            scenario(
                "Premium Plan + Personal Training",
                "Premium",
                &["Personal Training"],
                1,
                PremiumTier::None,
            ),
            scenario(
                "Premium Plan + Multiple Features",
                "Premium",
                &["Personal Training", "Group Classes"],
                1,
                PremiumTier::None,
            ),
            scenario("Family Plan + All Features", "Family", ALL_FEATURES, 1, PremiumTier::None),
        ],
    ),
    (
        "GROUP DISCOUNT SCENARIOS",
        &[
            scenario("2 Members - Basic Plan", "Basic", &[], 2, PremiumTier::None),
            scenario(
                "3 Members - Premium Plan + Features",
                "Premium",
                &["Personal Training", "Group Classes"],
                3,
                PremiumTier::None,
            ),
            scenario("5 Members - Family Plan", "Family", &[], 5, PremiumTier::None),
        ],
    ),
    (
        "SPECIAL OFFER DISCOUNT SCENARIOS",
        &[
            scenario(
                "Family + 1 Feature (no special discount)",
                "Family",
                &["Personal Training"],
                1,
                PremiumTier::None,
            ),
            scenario(
                "Family + All Features (over $200, $20 discount)",
                "Family",
                ALL_FEATURES,
                1,
                PremiumTier::None,
            ),
        ],
    ),
    (
        "PREMIUM FEATURE SCENARIOS",
        &[
            scenario(
                "Premium Plan + Exclusive Facilities",
                "Premium",
                &[],
                1,
                PremiumTier::ExclusiveFacilities,
            ),
            scenario(
                "Family + Features + Specialized Training",
                "Family",
                &["Personal Training", "Group Classes"],
                1,
                PremiumTier::SpecializedTraining,
            ),
        ],
    ),
    (
        "COMPLEX SCENARIOS - ALL FACTORS COMBINED",
        &[
            Scenario {
                show_whole_dollars: true,
                ..scenario(
                    "2 Members - Family + All Features + Premium",
                    "Family",
                    ALL_FEATURES,
                    2,
                    PremiumTier::ExclusiveFacilities,
                )
            },
            Scenario {
                show_whole_dollars: true,
                ..scenario(
                    "3 Members - Premium + 2 Features + Specialized Training",
                    "Premium",
                    &["Personal Training", "Nutritional Consulting"],
                    3,
                    PremiumTier::SpecializedTraining,
                )
            },
        ],
    ),
];

/// Print every canned scenario's summary, then a few validation outcomes.
pub fn run(engine: &PricingEngine, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "{:^RULE_WIDTH$}",
        "GYM MEMBERSHIP MANAGEMENT SYSTEM - DEMONSTRATION"
    )?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    for (title, scenarios) in SECTIONS {
        section(out, title)?;
        for (i, s) in scenarios.iter().enumerate() {
            writeln!(out, "Scenario {}: {}", i + 1, s.title)?;
            writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

            let summary = engine.summary(s.plan, s.features, s.member_count, s.premium_tier)?;
            writeln!(out, "{summary}")?;

            if s.show_whole_dollars {
                let quote = engine.calculate_total_cost(s.plan, s.features, s.member_count, s.premium_tier)?;
                writeln!(out, "Final Cost as Integer: {}\n", quote.truncated_total())?;
            }
        }
    }

    validation_examples(engine, out)?;
    section(out, "DEMONSTRATION COMPLETE")?;
    Ok(())
}

fn validation_examples(engine: &PricingEngine, out: &mut impl Write) -> anyhow::Result<()> {
    section(out, "VALIDATION EXAMPLES")?;

    let checks = [
        ("Valid Plan - 'Premium'", engine.validate_plan("Premium")),
        ("Invalid Plan - 'InvalidPlan'", engine.validate_plan("InvalidPlan")),
        (
            "Valid Features - Personal Training, Group Classes",
            engine.validate_features(&["Personal Training", "Group Classes"]),
        ),
        ("Invalid Features - InvalidFeature", engine.validate_features(&["InvalidFeature"])),
        ("Valid Members - 3", engine.validate_member_count(3)),
        ("Invalid Members - 15", engine.validate_member_count(15)),
        ("Non-integer Members - 'two'", engine.parse_member_count("two").map(|_| ())),
    ];

    for (i, (label, result)) in checks.into_iter().enumerate() {
        writeln!(out, "{}. {label}:", i + 1)?;
        match result {
            Ok(()) => writeln!(out, "   Valid: true\n")?,
            Err(e) => writeln!(out, "   Valid: false, Kind: {:?}, Message: {e}\n", e.kind())?,
        }
    }

    Ok(())
}

fn section(out: &mut impl Write, title: &str) -> std::io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "{title:^RULE_WIDTH$}")?;
    writeln!(out, "{}\n", "=".repeat(RULE_WIDTH))
}
