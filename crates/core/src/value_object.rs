//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A membership
/// selection or a computed cost breakdown is a value object: two breakdowns with
/// the same amounts are interchangeable, regardless of which engine call
/// produced them.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`Breakdown { subtotal: 79.99, .. }`)
/// - **Entity**: identity by key (`Plan { name: "Basic", .. }` stays "Basic"
///   even after it is marked unavailable)
///
/// The trait requires `Clone`, `PartialEq` and `Debug` so values can be copied
/// around, compared in tests and logged.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
