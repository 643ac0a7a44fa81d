use std::io::Write;

use anyhow::Context;

use gymfee_membership::{PricingEngine, Selection};

use crate::cli::QuoteArgs;

/// Validate the selection, then print its summary (or the JSON quote).
pub fn run(engine: &PricingEngine, args: &QuoteArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let selection = selection_from_args(engine, args)?;
    engine.validate_selection(&selection)?;

    if args.json {
        let quote = engine.quote(&selection)?;
        serde_json::to_writer_pretty(&mut *out, &quote).context("failed to encode quote")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", engine.selection_summary(&selection)?)?;
    }

    Ok(())
}

fn selection_from_args(engine: &PricingEngine, args: &QuoteArgs) -> anyhow::Result<Selection> {
    if let Some(path) = &args.selection {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read selection {}", path.display()))?;
        return engine
            .parse_selection(&raw)
            .with_context(|| format!("invalid selection {}", path.display()));
    }

    let plan = args.plan.clone().context("--plan is required")?;
    let member_count = engine.parse_member_count(&args.members)?;

    Ok(Selection {
        plan,
        features: args.features.clone(),
        member_count,
        premium_tier: args.premium,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gymfee_core::{DomainError, ValidationErrorKind};
    use gymfee_membership::PremiumTier;

    fn args(plan: &str) -> QuoteArgs {
        QuoteArgs {
            plan: Some(plan.to_string()),
            features: Vec::new(),
            members: "1".to_string(),
            premium: PremiumTier::None,
            selection: None,
            json: false,
        }
    }

    #[test]
    fn prints_summary_by_default() {
        let engine = PricingEngine::standard();
        let mut out = Vec::new();

        run(&engine, &args("Basic"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Membership Plan: Basic"));
        assert!(text.contains("TOTAL COST:"));
    }

    #[test]
    fn json_output_carries_total_and_breakdown() {
        let engine = PricingEngine::standard();
        let mut a = args("Premium");
        a.premium = PremiumTier::ExclusiveFacilities;
        a.json = true;
        let mut out = Vec::new();

        run(&engine, &a, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let total = value["total"].as_f64().unwrap();
        assert!((total - 68.9885).abs() < 1e-9);
        assert_eq!(value["breakdown"]["base_cost"], 59.99);
    }

    #[test]
    fn selection_file_is_priced_as_written() {
        let path = std::env::temp_dir().join(format!("gymfee-selection-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "plan": "Premium", "premium_tier": "exclusive_facilities" }"#).unwrap();

        let engine = PricingEngine::standard();
        let mut a = args("Premium");
        a.plan = None;
        a.selection = Some(path.clone());
        a.json = true;
        let mut out = Vec::new();
        let result = run(&engine, &a, &mut out);
        std::fs::remove_file(&path).unwrap();
        result.unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let total = value["total"].as_f64().unwrap();
        assert!((total - 68.9885).abs() < 1e-9);
    }

    #[test]
    fn oversized_member_count_in_selection_file_is_out_of_range() {
        let path = std::env::temp_dir().join(format!("gymfee-oversized-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "plan": "Basic", "member_count": 4294967296 }"#).unwrap();

        let engine = PricingEngine::standard();
        let mut a = args("Basic");
        a.plan = None;
        a.selection = Some(path.clone());
        let result = run(&engine, &a, &mut Vec::new());
        std::fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        let kind = err.downcast_ref::<DomainError>().map(DomainError::kind);
        assert_eq!(kind, Some(ValidationErrorKind::OutOfRange));
    }

    #[test]
    fn invalid_selections_surface_domain_errors() {
        let engine = PricingEngine::standard();

        let mut a = args("Basic");
        a.members = "eleven".to_string();
        let err = run(&engine, &a, &mut Vec::new()).unwrap_err();
        let kind = err.downcast_ref::<DomainError>().map(DomainError::kind);
        assert_eq!(kind, Some(ValidationErrorKind::InvalidInput));

        let mut a = args("Basic");
        a.features = vec!["Yoga".to_string()];
        let err = run(&engine, &a, &mut Vec::new()).unwrap_err();
        let kind = err.downcast_ref::<DomainError>().map(DomainError::kind);
        assert_eq!(kind, Some(ValidationErrorKind::NotFound));
    }
}
