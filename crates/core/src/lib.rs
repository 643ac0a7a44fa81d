//! `gymfee-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no I/O, no formatting of
//! user-facing output).

pub mod entity;
pub mod error;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, ValidationErrorKind};
pub use value_object::ValueObject;
