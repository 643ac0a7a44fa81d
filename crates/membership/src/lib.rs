//! Membership pricing domain module.
//!
//! This crate contains the pricing rules for gym memberships, implemented purely
//! as deterministic domain logic (no IO, no prompting, no storage):
//! - catalogs of plans and add-on features with availability flags
//! - validation of a membership selection against a catalog
//! - the fixed discount/surcharge pipeline and its breakdown
//! - a textual summary rendered from the pipeline's output

pub mod catalog;
pub mod engine;
pub mod pipeline;
pub mod premium;
pub mod rules;
pub mod selection;
pub mod summary;
pub mod validation;

pub use catalog::{Catalog, Feature, Plan};
pub use engine::{PricingEngine, Quote};
pub use pipeline::{
    Adjustment, Breakdown, group_discount, premium_surcharge, special_offer_discount,
};
pub use premium::PremiumTier;
pub use rules::{PricingRules, SpecialOffer};
pub use selection::Selection;
