//! `gymfee` command-line front end.
//!
//! Everything here is glue over [`gymfee_membership::PricingEngine`]: prompting,
//! printing and argument parsing. No pricing arithmetic lives in this crate.

pub mod cli;
pub mod commands;
pub mod config;
pub mod flow;

pub use cli::{Cli, Commands, QuoteArgs};
pub use flow::{CANCELLED, InteractiveFlow};
