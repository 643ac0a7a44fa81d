//! Validation of a selection against a catalog and the member bounds.
//!
//! Validation always runs before calculation; the pipeline itself does not
//! re-check availability.

use gymfee_core::{DomainError, DomainResult, Entity};

use crate::catalog::Catalog;
use crate::rules::PricingRules;
use crate::selection::Selection;

pub fn validate_plan(catalog: &Catalog, name: &str) -> DomainResult<()> {
    let plan = catalog
        .plan(name)
        .ok_or_else(|| DomainError::not_found(format!("Membership plan '{name}' does not exist.")))?;

    if !plan.is_available() {
        return Err(DomainError::unavailable(format!(
            "Membership plan '{name}' is currently unavailable."
        )));
    }

    Ok(())
}

pub fn validate_features<S: AsRef<str>>(catalog: &Catalog, names: &[S]) -> DomainResult<()> {
    for name in names {
        let name = name.as_ref();
        let feature = catalog.feature(name).ok_or_else(|| {
            DomainError::not_found(format!("Additional feature '{name}' does not exist."))
        })?;

        if !feature.is_available() {
            return Err(DomainError::unavailable(format!(
                "Additional feature '{name}' is currently unavailable."
            )));
        }
    }

    Ok(())
}

pub fn validate_member_count(rules: &PricingRules, n: i64) -> DomainResult<()> {
    if n < i64::from(rules.min_members) {
        return Err(too_few_members(rules));
    }

    if n > i64::from(rules.max_members) {
        return Err(too_many_members(rules));
    }

    Ok(())
}

pub(crate) fn too_few_members(rules: &PricingRules) -> DomainError {
    DomainError::out_of_range(format!(
        "Number of members must be at least {}.",
        rules.min_members
    ))
}

pub(crate) fn too_many_members(rules: &PricingRules) -> DomainError {
    DomainError::out_of_range(format!(
        "Number of members cannot exceed {}.",
        rules.max_members
    ))
}

/// Parse raw user input as a member count and check its bounds.
///
/// Only plain digits are accepted (no sign, no decimal point). A digit string
/// too large to parse is over the upper bound, not malformed.
pub fn parse_member_count(rules: &PricingRules, input: &str) -> DomainResult<u32> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::invalid_input("Number of members must be an integer."));
    }

    let n: i64 = input.parse().map_err(|_| too_many_members(rules))?;
    validate_member_count(rules, n)?;

    u32::try_from(n).map_err(|_| too_many_members(rules))
}

/// Plan, then member count, then features; the first failure wins.
pub fn validate_selection(catalog: &Catalog, rules: &PricingRules, selection: &Selection) -> DomainResult<()> {
    validate_plan(catalog, &selection.plan)?;
    validate_member_count(rules, i64::from(selection.member_count))?;
    validate_features(catalog, &selection.features)
}
