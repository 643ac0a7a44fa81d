//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Catalog entries (plans, features) are entities keyed by name: toggling
/// availability changes their state but not their identity.
pub trait Entity {
    /// Identifier type.
    type Id: ?Sized + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether the entity may currently be selected.
    fn is_available(&self) -> bool;
}
