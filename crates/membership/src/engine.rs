use serde::{Deserialize, Serialize};

use gymfee_core::{DomainError, DomainResult, ValueObject};

use crate::catalog::{Catalog, Feature, Plan};
use crate::pipeline::{self, Breakdown, StageContext};
use crate::premium::PremiumTier;
use crate::rules::PricingRules;
use crate::selection::Selection;
use crate::{summary, validation};

/// Final price plus every intermediate amount that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub total: f64,
    pub breakdown: Breakdown,
}

impl ValueObject for Quote {}

impl Quote {
    /// Whole-dollar amount reported by the interactive flow (truncated, not rounded).
    pub fn truncated_total(&self) -> i64 {
        self.total.trunc() as i64
    }
}

/// Owns one catalog and one rule set; engines never share state.
///
/// Availability toggles take `&mut self`. Wrap the engine in a lock if it has
/// to be shared between threads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PricingEngine {
    catalog: Catalog,
    rules: PricingRules,
}

impl PricingEngine {
    pub fn new(catalog: Catalog, rules: PricingRules) -> Self {
        Self { catalog, rules }
    }

    /// Seed catalog with the default rules.
    pub fn standard() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    pub fn available_plans(&self) -> Vec<&Plan> {
        self.catalog.available_plans().collect()
    }

    pub fn available_features(&self) -> Vec<&Feature> {
        self.catalog.available_features().collect()
    }

    pub fn set_plan_available(&mut self, name: &str, available: bool) -> DomainResult<()> {
        self.catalog.set_plan_available(name, available)?;
        tracing::info!(plan = name, available, "plan availability changed");
        Ok(())
    }

    pub fn set_feature_available(&mut self, name: &str, available: bool) -> DomainResult<()> {
        self.catalog.set_feature_available(name, available)?;
        tracing::info!(feature = name, available, "feature availability changed");
        Ok(())
    }

    pub fn validate_plan(&self, name: &str) -> DomainResult<()> {
        validation::validate_plan(&self.catalog, name)
    }

    pub fn validate_features<S: AsRef<str>>(&self, names: &[S]) -> DomainResult<()> {
        validation::validate_features(&self.catalog, names)
    }

    pub fn validate_member_count(&self, n: i64) -> DomainResult<()> {
        validation::validate_member_count(&self.rules, n)
    }

    pub fn parse_member_count(&self, input: &str) -> DomainResult<u32> {
        validation::parse_member_count(&self.rules, input)
    }

    /// Decode an untyped JSON selection against these rules' member bounds.
    pub fn parse_selection(&self, json: &str) -> DomainResult<Selection> {
        Selection::from_json(json, &self.rules)
    }

    pub fn validate_selection(&self, selection: &Selection) -> DomainResult<()> {
        validation::validate_selection(&self.catalog, &self.rules, selection)
    }

    pub fn base_cost(&self, plan: &str) -> DomainResult<f64> {
        self.catalog
            .plan(plan)
            .map(Plan::base_cost)
            .ok_or_else(|| DomainError::not_found(format!("Membership plan '{plan}' does not exist.")))
    }

    /// Sum of feature prices; repeated names are charged once per occurrence.
    pub fn features_cost<S: AsRef<str>>(&self, features: &[S]) -> DomainResult<f64> {
        features.iter().try_fold(0.0, |total, name| {
            let name = name.as_ref();
            self.catalog
                .feature(name)
                .map(|f| total + f.cost())
                .ok_or_else(|| {
                    DomainError::not_found(format!("Additional feature '{name}' does not exist."))
                })
        })
    }

    /// Price a selection. Inputs are expected to be validated already: availability
    /// is not re-checked, and unknown names fail with `NotFound`.
    pub fn calculate_total_cost<S: AsRef<str>>(
        &self,
        plan: &str,
        features: &[S],
        member_count: u32,
        premium_tier: PremiumTier,
    ) -> DomainResult<Quote> {
        let base_cost = self.base_cost(plan)?;
        let features_cost = self.features_cost(features)?;

        let ctx = StageContext {
            member_count,
            premium_tier,
            rules: &self.rules,
        };
        let breakdown = pipeline::run(base_cost, features_cost, &ctx);

        tracing::debug!(
            plan,
            features = features.len(),
            member_count,
            premium_tier = %premium_tier,
            total = breakdown.total_cost,
            "membership cost calculated"
        );

        Ok(Quote {
            total: breakdown.total_cost,
            breakdown,
        })
    }

    pub fn quote(&self, selection: &Selection) -> DomainResult<Quote> {
        self.calculate_total_cost(
            &selection.plan,
            &selection.features,
            selection.member_count,
            selection.premium_tier,
        )
    }

    /// Formatted report of the selection, rendered from a fresh calculation.
    pub fn summary<S: AsRef<str>>(
        &self,
        plan: &str,
        features: &[S],
        member_count: u32,
        premium_tier: PremiumTier,
    ) -> DomainResult<String> {
        let quote = self.calculate_total_cost(plan, features, member_count, premium_tier)?;
        let lines = features
            .iter()
            .map(|name| {
                let name = name.as_ref();
                let cost = self.catalog.feature(name).map_or(0.0, Feature::cost);
                (name, cost)
            })
            .collect::<Vec<_>>();

        Ok(summary::render(
            &summary::SummaryInput {
                plan,
                features: &lines,
                member_count,
                premium_tier,
                rules: &self.rules,
            },
            &quote.breakdown,
        ))
    }

    pub fn selection_summary(&self, selection: &Selection) -> DomainResult<String> {
        self.summary(
            &selection.plan,
            &selection.features,
            selection.member_count,
            selection.premium_tier,
        )
    }

    /// Group discount the plan alone would earn at `member_count`; zero below the threshold.
    pub fn group_savings(&self, plan: &str, member_count: u32) -> DomainResult<f64> {
        let none: [&str; 0] = [];
        let quote = self.calculate_total_cost(plan, &none, member_count, PremiumTier::None)?;
        Ok(quote.breakdown.group_discount)
    }
}
